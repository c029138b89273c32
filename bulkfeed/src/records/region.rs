//! Region / customer-topology staging records (blocks 101-113).

use chrono::NaiveDateTime;

/// Block 101 — province master upserted into `dbo.fprovinsi`.
#[derive(Debug, Clone)]
pub struct Province {
    pub provinsi_id: String,
    pub provinsi_name: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 102 — district master upserted into `dbo.fdistrik`.
#[derive(Debug, Clone)]
pub struct District {
    pub kodecabang: String,
    pub distrik: String,
    pub distrik_name: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 103 — beat (area) master upserted into `dbo.gm_cust_wilayah`.
#[derive(Debug, Clone)]
pub struct Beat {
    pub wc_district_id: String,
    pub wc_wilayah_id: String,
    pub wc_wilayah_desc: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 104 — rayon (sub-beat) master upserted into `dbo.gm_cust_rayon`.
#[derive(Debug, Clone)]
pub struct Rayon {
    pub rc_district_id: String,
    pub rc_wilayah_id: String,
    pub rc_rayon_id: String,
    pub rc_rayon_desc: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 105 — market master upserted into `dbo.gm_cust_market`.
#[derive(Debug, Clone)]
pub struct Market {
    pub psr_pasar_id: String,
    pub psr_long_desc: String,
    pub psr_short_desc: String,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 108 — back-order status upserted into `dbo.forder_hd_status`.
#[derive(Debug, Clone)]
pub struct BackOrderStatus {
    pub tgl_order: String,
    pub orderno: String,
    pub slsno: String,
    pub custno: String,
    pub kodecabang: String,
    pub orderno_topup: String,
    pub pcode: String,
    pub status: String,
    pub status_detail: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 109 — ship-to relation upserted into `dbo.fshippto`.
#[derive(Debug, Clone)]
pub struct ShipTo {
    pub custno: String,
    pub custno_ship: String,
    pub desc_custno_ship: String,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 110 — payer relation upserted into `dbo.FMST_PAYTO`.
#[derive(Debug, Clone)]
pub struct PayerTo {
    pub custno: String,
    pub custno_bil: String,
    pub desc_custno_bil: String,
    pub kodecabang: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 111 — customer invoice totals upserted into `dbo.fmst_custinv_h`.
#[derive(Debug, Clone)]
pub struct CustomerInvoiceHeader {
    pub bid: String,
    pub bname: String,
    pub mu_id: String,
    pub mu_name: String,
    pub custno: String,
    pub custname: String,
    pub inv_total: String,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 112 — customer invoice detail upserted into `dbo.fmst_custinv_d`.
#[derive(Debug, Clone)]
pub struct CustomerInvoiceDetail {
    pub bid: String,
    pub bname: String,
    pub mu_id: String,
    pub mu_name: String,
    pub custno: String,
    pub custname: String,
    pub invno: String,
    pub invdate: String,
    pub duedate: String,
    pub inv_amount: f64,
    pub inv_outstanding: f64,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}

/// Block 113 — customer-specific prices appended to `dbo.mkplprice_dummy`.
#[derive(Debug, Clone)]
pub struct CustomerPrice {
    pub uniq_id: String,
    pub line_no: i64,
    pub cust_code: String,
    pub branch_id: String,
    pub pcode: String,
    pub price_value: f64,
    pub price_uom: String,
    pub cby: String,
    pub cdate: NaiveDateTime,
    pub mby: String,
    pub mdate: NaiveDateTime,
    pub core_filename: String,
    pub core_process_date: NaiveDateTime,
}
