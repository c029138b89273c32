//! Decoders for the region / customer-topology blocks (101-113).

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::mpsc;

use crate::decode::{Decoder, FileJob, send_row};
use crate::error::FeedResult;
use crate::parse::{Fields, dash_yyyymmdd, parse_number};
use crate::records::*;

pub struct ProvinceDecoder {
    out: mpsc::Sender<Province>,
}

impl ProvinceDecoder {
    pub fn new(out: mpsc::Sender<Province>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ProvinceDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "101",
            Province {
                provinsi_id: fields.owned(2),
                provinsi_name: fields.owned(3),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct DistrictDecoder {
    out: mpsc::Sender<District>,
}

impl DistrictDecoder {
    pub fn new(out: mpsc::Sender<District>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for DistrictDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "102",
            District {
                kodecabang: fields.owned(2),
                distrik_name: fields.owned(3),
                distrik: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct BeatDecoder {
    out: mpsc::Sender<Beat>,
}

impl BeatDecoder {
    pub fn new(out: mpsc::Sender<Beat>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for BeatDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "103",
            Beat {
                wc_district_id: fields.owned(2),
                wc_wilayah_id: fields.owned(3),
                wc_wilayah_desc: fields.owned(4),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct RayonDecoder {
    out: mpsc::Sender<Rayon>,
}

impl RayonDecoder {
    pub fn new(out: mpsc::Sender<Rayon>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for RayonDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "104",
            Rayon {
                rc_district_id: fields.owned(2),
                rc_wilayah_id: fields.owned(3),
                rc_rayon_id: fields.owned(4),
                rc_rayon_desc: fields.owned(5),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct MarketDecoder {
    out: mpsc::Sender<Market>,
}

impl MarketDecoder {
    pub fn new(out: mpsc::Sender<Market>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for MarketDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "105",
            Market {
                psr_pasar_id: fields.owned(2),
                psr_long_desc: fields.owned(3),
                psr_short_desc: fields.owned(4),
                kodecabang: fields.owned(5),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct BackOrderStatusDecoder {
    out: mpsc::Sender<BackOrderStatus>,
}

impl BackOrderStatusDecoder {
    pub fn new(out: mpsc::Sender<BackOrderStatus>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for BackOrderStatusDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "108",
            BackOrderStatus {
                tgl_order: dash_yyyymmdd(fields.get(2)),
                orderno: fields.owned(3),
                slsno: fields.owned(4),
                custno: fields.owned(5),
                kodecabang: fields.owned(6),
                orderno_topup: fields.owned(7),
                pcode: fields.owned(8),
                status: fields.owned(9),
                status_detail: fields.owned(10),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct ShipToDecoder {
    out: mpsc::Sender<ShipTo>,
}

impl ShipToDecoder {
    pub fn new(out: mpsc::Sender<ShipTo>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ShipToDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "109",
            ShipTo {
                custno: fields.owned(2),
                custno_ship: fields.owned(3),
                desc_custno_ship: fields.owned(4),
                kodecabang: fields.owned(5),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct PayerToDecoder {
    out: mpsc::Sender<PayerTo>,
}

impl PayerToDecoder {
    pub fn new(out: mpsc::Sender<PayerTo>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for PayerToDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "110",
            PayerTo {
                custno: fields.owned(2),
                custno_bil: fields.owned(3),
                desc_custno_bil: fields.owned(4),
                kodecabang: fields.owned(5),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CustomerInvoiceHeaderDecoder {
    out: mpsc::Sender<CustomerInvoiceHeader>,
}

impl CustomerInvoiceHeaderDecoder {
    pub fn new(out: mpsc::Sender<CustomerInvoiceHeader>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CustomerInvoiceHeaderDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "111",
            CustomerInvoiceHeader {
                bid: fields.owned(6),
                bname: fields.owned(7),
                mu_id: fields.owned(8),
                mu_name: fields.owned(9),
                custno: fields.owned(10),
                custname: fields.owned(11),
                inv_total: fields.owned(12),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CustomerInvoiceDetailDecoder {
    out: mpsc::Sender<CustomerInvoiceDetail>,
}

impl CustomerInvoiceDetailDecoder {
    pub fn new(out: mpsc::Sender<CustomerInvoiceDetail>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CustomerInvoiceDetailDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        _line_no: i64,
        job: &FileJob,
        _process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "112",
            CustomerInvoiceDetail {
                bid: fields.owned(6),
                bname: fields.owned(7),
                mu_id: fields.owned(8),
                mu_name: fields.owned(9),
                custno: fields.owned(10),
                custname: fields.owned(11),
                invno: fields.owned(12),
                invdate: dash_yyyymmdd(fields.get(13)),
                duedate: dash_yyyymmdd(fields.get(14)),
                inv_amount: parse_number(fields.get(15)),
                inv_outstanding: parse_number(fields.get(16)),
                core_filename: job.name.clone(),
                core_process_date: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct CustomerPriceDecoder {
    out: mpsc::Sender<CustomerPrice>,
}

impl CustomerPriceDecoder {
    pub fn new(out: mpsc::Sender<CustomerPrice>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for CustomerPriceDecoder {
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
            "113",
            CustomerPrice {
                uniq_id: process_id.to_string(),
                line_no,
                cust_code: fields.owned(2),
                branch_id: fields.owned(6),
                pcode: fields.owned(3),
                price_value: parse_number(fields.get(4)),
                price_uom: fields.owned(5),
                cby: "system".to_string(),
                cdate: now,
                mby: "system".to_string(),
                mdate: now,
                core_filename: job.name.clone(),
                core_process_date: now,
            },
        )
        .await
    }
}
