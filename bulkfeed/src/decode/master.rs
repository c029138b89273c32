//! Decoders for the master-data blocks (01-47).

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::mpsc;

use crate::decode::{Decoder, FileJob, send_row};
use crate::error::FeedResult;
use crate::parse::{Fields, dash_yyyymmdd, parse_accounting, parse_number, resolve_uom};
use crate::records::*;

/// Author stamped on generated audit columns.
const SYSTEM_AUTHOR: &str = "system";

pub(crate) fn to_i32(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}

/// Integer parse after stripping thousands commas; used by the invoice feed
/// which formats amounts as `1,234,567`.
fn comma_int(s: &str) -> f64 {
    s.replace(',', "").parse::<i64>().unwrap_or(0) as f64
}

pub struct PriceListDecoder {
    out: mpsc::Sender<PriceList>,
}

impl PriceListDecoder {
    pub fn new(out: mpsc::Sender<PriceList>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for PriceListDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        let now = Local::now().naive_local();
        send_row(
            &self.out,
            "16",
            PriceList {
                uniq_id: process_id.to_string(),
                line_no,
                price_code: fields.owned(2),
                branch_id: fields.owned(4),
                pcode: fields.owned(3),
                price_value: fields.owned(9),
                price_uom: fields.owned(10),
                cby: SYSTEM_AUTHOR.to_string(),
                cdate: now,
                mby: SYSTEM_AUTHOR.to_string(),
                mdate: now,
                core_filename: job.name.clone(),
                core_process_date: now,
            },
        )
        .await
    }
}

pub struct PriceGroupDecoder {
    out: mpsc::Sender<PriceGroup>,
}

impl PriceGroupDecoder {
    pub fn new(out: mpsc::Sender<PriceGroup>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for PriceGroupDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "15",
            PriceGroup {
                price_code: fields.owned(2),
                price_desc: fields.owned(3),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CustomerDecoder {
    out: mpsc::Sender<Customer>,
}

impl CustomerDecoder {
    pub fn new(out: mpsc::Sender<Customer>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CustomerDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "01",
            Customer {
                custno: fields.owned(2),
                data01: fields.owned(3),
                custname: fields.owned(4),
                custadd1: fields.owned(5),
                custadd2: fields.owned(6),
                city: fields.owned(7),
                contact: fields.owned(8),
                phone1: fields.owned(9),
                faxno: fields.owned(10),
                cterm: fields.owned(11),
                climit: to_i32(fields.get(12)),
                flag_limit: fields.owned(13),
                gdisc: fields.owned(14),
                grupout: fields.owned(15),
                typeout: fields.owned(16),
                gharga: fields.owned(17),
                flag_pay: fields.owned(18),
                flag_out: fields.owned(19),
                rpp: to_i32(fields.get(20)),
                lsales: to_i32(fields.get(21)),
                ldatetrs: fields.owned(22),
                lokasi: fields.owned(23),
                distrik: fields.owned(24),
                beat: fields.owned(25),
                subbeat: fields.owned(26),
                klasif: fields.owned(27),
                kindus: fields.owned(28),
                kpasar: fields.owned(29),
                kodecabang: fields.owned(30),
                la: fields.owned(31),
                lg: fields.owned(32),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

/// Product master decoder. The buy flags and base-unit resolution are driven
/// by the `UOM_BUY` / `UOM_MAIN` configuration captured at construction.
pub struct ProductDecoder {
    out: mpsc::Sender<Product>,
    uom_flags: [String; 5],
    uom_main: String,
}

impl ProductDecoder {
    pub fn new(out: mpsc::Sender<Product>, uom_buy: &str, uom_main: &str) -> Self {
        let tokens: Vec<&str> = uom_buy.split('|').collect();
        let mut uom_flags: [String; 5] = Default::default();
        for (i, flag) in uom_flags.iter_mut().enumerate() {
            if tokens.get(i).map(|t| !t.trim().is_empty()).unwrap_or(false) {
                *flag = "Y".to_string();
            }
        }
        Self {
            out,
            uom_flags,
            uom_main: uom_main.to_string(),
        }
    }
}

#[async_trait]
impl Decoder for ProductDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        let units = [
            fields.get(7),
            fields.get(8),
            fields.get(9),
            fields.get(10),
            fields.get(11),
        ];
        let (uom_base, position) = resolve_uom(&self.uom_main, &units);

        send_row(
            &self.out,
            "25",
            Product {
                prlin: fields.owned(2),
                brand: fields.owned(3),
                pcode: fields.owned(4),
                data1: fields.owned(5),
                pcode_name: fields.owned(6),
                unit1: fields.owned(7),
                unit2: fields.owned(8),
                unit3: fields.owned(9),
                unit4: fields.owned(10),
                unit5: fields.owned(11),
                convunit2: to_i32(fields.get(12)),
                convunit3: to_i32(fields.get(13)),
                convunit4: to_i32(fields.get(14)),
                convunit5: to_i32(fields.get(15)),
                ppn: to_i32(fields.get(16)),
                flag_aktif: fields.owned(17),
                flag_gift: fields.owned(26),
                short_name1: fields.owned(28),
                uom1_buy: self.uom_flags[0].clone(),
                uom2_buy: self.uom_flags[1].clone(),
                uom3_buy: self.uom_flags[2].clone(),
                uom4_buy: self.uom_flags[3].clone(),
                uom5_buy: self.uom_flags[4].clone(),
                uom_base,
                uom_main: (position + 1).to_string(),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CustomerGroupDecoder {
    out: mpsc::Sender<CustomerGroup>,
}

impl CustomerGroupDecoder {
    pub fn new(out: mpsc::Sender<CustomerGroup>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CustomerGroupDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "02",
            CustomerGroup {
                groupout: fields.owned(2),
                groupname: fields.owned(3),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct IndustryDecoder {
    out: mpsc::Sender<Industry>,
}

impl IndustryDecoder {
    pub fn new(out: mpsc::Sender<Industry>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for IndustryDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "05",
            Industry {
                indus_id: fields.owned(2),
                indus_name: fields.owned(3),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct OutletTypeDecoder {
    out: mpsc::Sender<OutletType>,
}

impl OutletTypeDecoder {
    pub fn new(out: mpsc::Sender<OutletType>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for OutletTypeDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "03",
            OutletType {
                outlet_type: fields.owned(2),
                type_name: fields.owned(3),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct PaymentTermDecoder {
    out: mpsc::Sender<PaymentTerm>,
}

impl PaymentTermDecoder {
    pub fn new(out: mpsc::Sender<PaymentTerm>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for PaymentTermDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "07",
            PaymentTerm {
                top: fields.owned(2),
                top_desc: fields.owned(3),
                top_days: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct RouteDecoder {
    out: mpsc::Sender<Route>,
}

impl RouteDecoder {
    pub fn new(out: mpsc::Sender<Route>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for RouteDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "19",
            Route {
                region: fields.owned(2),
                cabang: fields.owned(3),
                kodecabang: fields.owned(4),
                slsno: fields.owned(5),
                norute: fields.owned(6),
                custno: fields.owned(7),
                h1: fields.owned(8),
                h2: fields.owned(9),
                h3: fields.owned(10),
                h4: fields.owned(11),
                h5: fields.owned(12),
                h6: fields.owned(13),
                h7: fields.owned(14),
                m1: fields.owned(15),
                m2: fields.owned(16),
                m3: fields.owned(17),
                m4: fields.owned(18),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct SalesmanDecoder {
    out: mpsc::Sender<Salesman>,
}

impl SalesmanDecoder {
    pub fn new(out: mpsc::Sender<Salesman>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for SalesmanDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "20",
            Salesman {
                slsno: fields.owned(2),
                slsname: fields.owned(3),
                alamat1: fields.owned(4),
                alamat2: fields.owned(5),
                kota: fields.owned(6),
                pendidikan: fields.owned(7),
                tgl_lahir: fields.owned(8),
                tgl_masuk: fields.owned(9),
                tgl_trans: fields.owned(14),
                slspass: fields.owned(17),
                ec1: fields.owned(18),
                item: fields.owned(19),
                kodecabang: fields.owned(20),
                atasan_id: fields.owned(21),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct ProductLineDecoder {
    out: mpsc::Sender<ProductLine>,
}

impl ProductLineDecoder {
    pub fn new(out: mpsc::Sender<ProductLine>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ProductLineDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "22",
            ProductLine {
                prlin: fields.owned(2),
                prlin_name: fields.owned(3),
                komp_flag: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct BrandDecoder {
    out: mpsc::Sender<Brand>,
}

impl BrandDecoder {
    pub fn new(out: mpsc::Sender<Brand>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for BrandDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "23",
            Brand {
                brand: fields.owned(2),
                brand_name: fields.owned(3),
                kodecabang: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct ReceivableDecoder {
    out: mpsc::Sender<Receivable>,
}

impl ReceivableDecoder {
    pub fn new(out: mpsc::Sender<Receivable>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ReceivableDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "35",
            Receivable {
                custno: fields.owned(2),
                invno: fields.owned(3),
                invdate: fields.owned(4),
                duedate: fields.owned(5),
                inv_amount: fields.get(6).parse().unwrap_or(0.0),
                amount_paid: fields.get(7).parse().unwrap_or(0.0),
                slsno: fields.owned(8),
                kodecabang: fields.owned(9),
                inv_type: fields.owned(10),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct StockBalanceDecoder {
    out: mpsc::Sender<StockBalance>,
}

impl StockBalanceDecoder {
    pub fn new(out: mpsc::Sender<StockBalance>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for StockBalanceDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "39",
            StockBalance {
                kg: fields.owned(2),
                pcode: fields.owned(3),
                stock: parse_number(fields.get(5)),
                kodecabang: fields.owned(6),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct SalesInvoiceDecoder {
    out: mpsc::Sender<SalesInvoice>,
}

impl SalesInvoiceDecoder {
    pub fn new(out: mpsc::Sender<SalesInvoice>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for SalesInvoiceDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "43",
            SalesInvoice {
                slsno: fields.owned(2),
                custno: fields.owned(3),
                sfa_order_no: fields.owned(4),
                sfa_order_date: dash_yyyymmdd(fields.get(5)),
                orderno: fields.owned(6),
                order_date: dash_yyyymmdd(fields.get(7)),
                invoice_no: fields.owned(8),
                invoice_date: dash_yyyymmdd(fields.get(9)),
                pcode: fields.owned(10),
                qty: to_i32(fields.get(11)),
                price: comma_int(fields.get(12)),
                diskon: comma_int(fields.get(13)),
                kodecabang: fields.owned(14),
                inv_type: fields.owned(15),
                ref_cn: fields.owned(16),
                inv_amount: comma_int(fields.get(17)),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CreditLimitDecoder {
    out: mpsc::Sender<CreditLimit>,
}

impl CreditLimitDecoder {
    pub fn new(out: mpsc::Sender<CreditLimit>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CreditLimitDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "44",
            CreditLimit {
                custno: fields.owned(2),
                custname: fields.owned(3),
                credit_limit: parse_accounting(fields.get(4)),
                sisa_credit_limit: parse_accounting(fields.get(5)),
                kodecabang: fields.owned(6),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CategoryDecoder {
    out: mpsc::Sender<Category>,
}

impl CategoryDecoder {
    pub fn new(out: mpsc::Sender<Category>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CategoryDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "46",
            Category {
                kode: fields.owned(2),
                ket: fields.owned(3),
                kode_distributor: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct SubBrandDecoder {
    out: mpsc::Sender<SubBrand>,
}

impl SubBrandDecoder {
    pub fn new(out: mpsc::Sender<SubBrand>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for SubBrandDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "47",
            SubBrand {
                kode: fields.owned(2),
                brand: fields.owned(3),
                ket: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job() -> FileJob {
        FileJob::new(PathBuf::from("/in/001_MSKU.txt"))
    }

    #[tokio::test]
    async fn product_resolves_uom_from_priority_list() {
        let (tx, mut rx) = mpsc::channel(1);
        let decoder = ProductDecoder::new(tx, "KG|PCS|", "KG|PCS|CTN");

        let line = "25|MSKU|PL1|BR1|SKU1|D1|Product One|PCS|CTN|KG|||2|3|4|5|11|Y";
        let fields = Fields::split(line);
        decoder.handle(&fields, 1, &job(), "pid").await.unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.uom_base, "KG");
        assert_eq!(row.uom_main, "3");
        assert_eq!(row.uom1_buy, "Y");
        assert_eq!(row.uom2_buy, "Y");
        assert_eq!(row.uom3_buy, "");
        assert_eq!(row.convunit2, 2);
        assert_eq!(row.ppn, 11);
    }

    #[tokio::test]
    async fn price_list_carries_envelope_and_line_number() {
        let (tx, mut rx) = mpsc::channel(1);
        let decoder = PriceListDecoder::new(tx);

        let fields = Fields::split("16|MPRICE|P01|SKU1|BR1|||||100,00|KG");
        decoder.handle(&fields, 7, &job(), "pid-9").await.unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.uniq_id, "pid-9");
        assert_eq!(row.line_no, 7);
        assert_eq!(row.price_code, "P01");
        assert_eq!(row.pcode, "SKU1");
        assert_eq!(row.branch_id, "BR1");
        assert_eq!(row.price_value, "100,00");
        assert_eq!(row.core_filename, "001_MSKU.txt");
    }

    #[tokio::test]
    async fn sales_invoice_normalizes_dates_and_amounts() {
        let (tx, mut rx) = mpsc::channel(1);
        let decoder = SalesInvoiceDecoder::new(tx);

        let line = "43|SLSINV|S1|C1|SO1|20240105|O1|20240106|INV1|20240107|P1|5|1,500|250|BR|R|RC|7,250";
        let fields = Fields::split(line);
        decoder.handle(&fields, 1, &job(), "pid").await.unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.sfa_order_date, "2024-01-05");
        assert_eq!(row.invoice_date, "2024-01-07");
        assert_eq!(row.qty, 5);
        assert_eq!(row.price, 1500.0);
        assert_eq!(row.inv_amount, 7250.0);
    }
}
