//! Master-data staging records (blocks 01-47).

use chrono::NaiveDateTime;

/// Block 16 — price list rows appended to `dbo.m_price_dummy`.
#[derive(Debug, Clone)]
pub struct PriceList {
    pub uniq_id: String,
    pub line_no: i64,
    pub price_code: String,
    pub branch_id: String,
    pub pcode: String,
    pub price_value: String,
    pub price_uom: String,
    pub cby: String,
    pub cdate: NaiveDateTime,
    pub mby: String,
    pub mdate: NaiveDateTime,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 15 — price group master upserted into `dbo.fgharga`.
#[derive(Debug, Clone)]
pub struct PriceGroup {
    pub price_code: String,
    pub price_desc: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 01 — customer master upserted into `dbo.fcustmst`.
#[derive(Debug, Clone)]
pub struct Customer {
    pub custno: String,
    pub data01: String,
    pub custname: String,
    pub custadd1: String,
    pub custadd2: String,
    pub city: String,
    pub contact: String,
    pub phone1: String,
    pub faxno: String,
    pub cterm: String,
    pub climit: i32,
    pub flag_limit: String,
    pub gdisc: String,
    pub grupout: String,
    pub typeout: String,
    pub gharga: String,
    pub flag_pay: String,
    pub flag_out: String,
    pub rpp: i32,
    pub lsales: i32,
    pub ldatetrs: String,
    pub lokasi: String,
    pub distrik: String,
    pub beat: String,
    pub subbeat: String,
    pub klasif: String,
    pub kindus: String,
    pub kpasar: String,
    pub kodecabang: String,
    pub la: String,
    pub lg: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 25 — product master upserted into `dbo.fmaster`, including the
/// resolved unit-of-measure pair.
#[derive(Debug, Clone)]
pub struct Product {
    pub prlin: String,
    pub brand: String,
    pub pcode: String,
    pub data1: String,
    pub pcode_name: String,
    pub unit1: String,
    pub unit2: String,
    pub unit3: String,
    pub unit4: String,
    pub unit5: String,
    pub convunit2: i32,
    pub convunit3: i32,
    pub convunit4: i32,
    pub convunit5: i32,
    pub ppn: i32,
    pub flag_aktif: String,
    pub flag_gift: String,
    pub short_name1: String,
    pub uom1_buy: String,
    pub uom2_buy: String,
    pub uom3_buy: String,
    pub uom4_buy: String,
    pub uom5_buy: String,
    pub uom_base: String,
    pub uom_main: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 02 — customer group upserted into `dbo.fgrupout`.
#[derive(Debug, Clone)]
pub struct CustomerGroup {
    pub groupout: String,
    pub groupname: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 05 — industry classification upserted into `dbo.findustri`.
#[derive(Debug, Clone)]
pub struct Industry {
    pub indus_id: String,
    pub indus_name: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 03 — outlet type upserted into `dbo.ftypeout`.
#[derive(Debug, Clone)]
pub struct OutletType {
    pub outlet_type: String,
    pub type_name: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 07 — payment terms upserted into `dbo.ftop`.
#[derive(Debug, Clone)]
pub struct PaymentTerm {
    pub top: String,
    pub top_desc: String,
    pub top_days: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 19 — visit routes upserted into `dbo.frute`.
#[derive(Debug, Clone)]
pub struct Route {
    pub region: String,
    pub cabang: String,
    pub kodecabang: String,
    pub slsno: String,
    pub norute: String,
    pub custno: String,
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub h5: String,
    pub h6: String,
    pub h7: String,
    pub m1: String,
    pub m2: String,
    pub m3: String,
    pub m4: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 20 — salesman master upserted into `dbo.fsalesman`.
#[derive(Debug, Clone)]
pub struct Salesman {
    pub slsno: String,
    pub slsname: String,
    pub alamat1: String,
    pub alamat2: String,
    pub kota: String,
    pub pendidikan: String,
    pub tgl_lahir: String,
    pub tgl_masuk: String,
    pub tgl_trans: String,
    pub slspass: String,
    pub ec1: String,
    pub item: String,
    pub kodecabang: String,
    pub atasan_id: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 22 — product line upserted into `dbo.fprlin`.
#[derive(Debug, Clone)]
pub struct ProductLine {
    pub prlin: String,
    pub prlin_name: String,
    pub komp_flag: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 23 — brand master upserted into `dbo.fbrand`.
#[derive(Debug, Clone)]
pub struct Brand {
    pub brand: String,
    pub brand_name: String,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 35 — open receivables upserted into `dbo.fpiutang_temp`.
#[derive(Debug, Clone)]
pub struct Receivable {
    pub custno: String,
    pub invno: String,
    pub invdate: String,
    pub duedate: String,
    pub inv_amount: f64,
    pub amount_paid: f64,
    pub slsno: String,
    pub kodecabang: String,
    pub inv_type: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 39 — stock balance upserted into `dbo.fstockbarang`.
#[derive(Debug, Clone)]
pub struct StockBalance {
    pub kg: String,
    pub pcode: String,
    pub stock: f64,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 43 — sales invoices upserted into `dbo.sap_web_inv_sfa`.
#[derive(Debug, Clone)]
pub struct SalesInvoice {
    pub slsno: String,
    pub custno: String,
    pub sfa_order_no: String,
    pub sfa_order_date: String,
    pub orderno: String,
    pub order_date: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub pcode: String,
    pub qty: i32,
    pub price: f64,
    pub diskon: f64,
    pub kodecabang: String,
    pub inv_type: String,
    pub ref_cn: String,
    pub inv_amount: f64,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 44 — credit limits upserted into `dbo.fcredit_limit`. The envelope
/// lands in the `UPDATEBY` / `UPDATEDATE` columns of the target.
#[derive(Debug, Clone)]
pub struct CreditLimit {
    pub custno: String,
    pub custname: String,
    pub credit_limit: f64,
    pub sisa_credit_limit: f64,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 46 — product category upserted into `dbo.fkategori`.
#[derive(Debug, Clone)]
pub struct Category {
    pub kode: String,
    pub ket: String,
    pub kode_distributor: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 47 — sub-brand upserted into `dbo.fsubbrand`.
#[derive(Debug, Clone)]
pub struct SubBrand {
    pub kode: String,
    pub brand: String,
    pub ket: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}
