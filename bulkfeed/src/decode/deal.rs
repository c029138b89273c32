//! Decoders for the sales-deal blocks (120-132).
//!
//! Blocks 123 and 130 fan out: the same record goes to the main staging
//! channel and to the shared promo-check channel.

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::mpsc;

use crate::decode::master::to_i32;
use crate::decode::{Decoder, FileJob, send_row};
use crate::error::FeedResult;
use crate::parse::{Fields, parse_accounting, parse_number, parse_yyyymmdd};
use crate::records::*;

pub struct DealHeaderDecoder {
    out: mpsc::Sender<DealHeader>,
}

impl DealHeaderDecoder {
    pub fn new(out: mpsc::Sender<DealHeader>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for DealHeaderDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        let condition_type = fields.owned(2);
        let key_combination = fields.owned(3);
        let sales_organization = fields.owned(4);
        let distribution_channel = fields.owned(5);
        let sales_office = fields.owned(6);
        let division = fields.owned(7);
        let payment_term = fields.owned(8);
        let customer = fields.owned(9);
        let attribut2 = fields.owned(11);

        // Fixed concatenation order; persisted as-is and used downstream as
        // a secondary lookup key.
        let keycomb = format!(
            "{condition_type}{key_combination}{sales_organization}{distribution_channel}\
             {sales_office}{division}{payment_term}{customer}{attribut2}"
        );

        send_row(
            &self.out,
            "120",
            DealHeader {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                condition_type,
                key_combination,
                keycomb,
                sales_organization,
                distribution_channel,
                sales_office,
                division,
                payment_term,
                customer,
                material: fields.owned(10),
                attribut2,
                valid_until: parse_yyyymmdd(fields.get(12)),
                valid_from: parse_yyyymmdd(fields.get(13)),
                condition_record_no: fields.owned(14),
                scale: fields.owned(15),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct DealItemDecoder {
    out: mpsc::Sender<DealItem>,
}

impl DealItemDecoder {
    pub fn new(out: mpsc::Sender<DealItem>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for DealItemDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        let condition_type = fields.owned(2);
        let key_combination = fields.owned(3);
        let sales_organization = fields.owned(4);
        let distribution_channel = fields.owned(5);
        let sales_office = fields.owned(6);
        let division = fields.owned(7);
        let sold_to_party = fields.owned(8);
        let pricing_ref_matl = fields.owned(9);
        let payment_terms = fields.owned(10);
        let industry_code3 = fields.owned(11);
        let industry_code4 = fields.owned(12);
        let industry_code5 = fields.owned(13);
        let attribute1 = fields.owned(14);
        let attribute2 = fields.owned(15);
        let sales_unit = fields.owned(17);

        let keycomb = format!(
            "{condition_type}{key_combination}{sales_organization}{distribution_channel}\
             {sales_office}{division}{sold_to_party}{pricing_ref_matl}{payment_terms}\
             {industry_code3}{industry_code4}{industry_code5}{attribute1}{attribute2}{sales_unit}"
        );

        send_row(
            &self.out,
            "121",
            DealItem {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                condition_type,
                key_combination,
                keycomb,
                sales_organization,
                distribution_channel,
                sales_office,
                division,
                sold_to_party,
                pricing_ref_matl,
                payment_terms,
                industry_code3,
                industry_code4,
                industry_code5,
                attribute1,
                attribute2,
                material: fields.owned(16),
                sales_unit,
                valid_from: parse_yyyymmdd(fields.get(18)),
                valid_until: parse_yyyymmdd(fields.get(19)),
                condition_record_no: fields.owned(20),
                scale: fields.owned(21),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct DealDetailDecoder {
    out: mpsc::Sender<DealDetail>,
}

impl DealDetailDecoder {
    pub fn new(out: mpsc::Sender<DealDetail>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for DealDetailDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "122",
            DealDetail {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                condition_record_no: fields.owned(2),
                amount: parse_accounting(fields.get(3)),
                unit: fields.owned(4),
                per: parse_number(fields.get(5)),
                uom: fields.owned(6),
                scale: fields.owned(7),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
            },
        )
        .await
    }
}

/// Block 123 fans out: the full record goes to the ZPMIX staging channel and
/// its promo registration to the shared promo-check channel.
pub struct PromoMixDecoder {
    out: mpsc::Sender<PromoMix>,
    out_promo: mpsc::Sender<PromoCheck>,
}

impl PromoMixDecoder {
    pub fn new(out: mpsc::Sender<PromoMix>, out_promo: mpsc::Sender<PromoCheck>) -> Self {
        Self { out, out_promo }
    }
}

#[async_trait]
impl Decoder for PromoMixDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        let record = PromoMix {
            process_id: process_id.to_string(),
            block_id: fields.owned(0),
            block_name: fields.owned(1),
            ctyp: fields.owned(2),
            key_combination: fields.owned(3),
            sorg: fields.owned(4),
            dchl: fields.owned(5),
            soff: fields.owned(6),
            dv: fields.owned(7),
            customer: fields.owned(8),
            indcode2: fields.owned(9),
            indcode3: fields.owned(10),
            indcode4: fields.owned(11),
            indcode5: fields.owned(12),
            pl: fields.owned(13),
            payt: fields.owned(14),
            material: fields.owned(15),
            valid_until: parse_yyyymmdd(fields.get(16)),
            valid_from: parse_yyyymmdd(fields.get(17)),
            promo_id: fields.owned(18),
            line_item: to_i32(fields.get(19)),
            file_name: job.name.clone(),
            line_number: line_no,
            cdate: Local::now().naive_local(),
            must_buy: fields.owned(20),
            exclude: fields.owned(21),
            split: fields.owned(22),
            amountx: fields.owned(23),
            rangex: fields.owned(24),
            with_material: fields.owned(25),
            kelipatan: fields.owned(26),
            v_kelipatan: to_i32(fields.get(27)),
            perbandingan: fields.owned(28),
            v_perbandingan1: to_i32(fields.get(29)),
            v_perbandingan2: to_i32(fields.get(30)),
            attr_prd_lv2: fields.owned(31),
            attr_prd_lv3: fields.owned(32),
            fl_cust_exc: fields.owned(33),
            cust_exc: fields.owned(34),
            fl_hd: fields.owned(35),
        };

        let promo = PromoCheck {
            process_id: record.process_id.clone(),
            block_id: record.block_id.clone(),
            block_name: record.block_name.clone(),
            promo_id: record.promo_id.clone(),
            ddate: record.cdate.date(),
            cdate: record.cdate,
        };

        send_row(&self.out, "123", record).await?;
        send_row(&self.out_promo, "123", promo).await
    }
}

pub struct ScaleRegularDecoder {
    out: mpsc::Sender<ScaleRegular>,
}

impl ScaleRegularDecoder {
    pub fn new(out: mpsc::Sender<ScaleRegular>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ScaleRegularDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "124",
            ScaleRegular {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                condition_record_no: fields.owned(2),
                no: to_i32(fields.get(3)),
                lsno: to_i32(fields.get(4)),
                disc_reg_hdr_qty: parse_accounting(fields.get(5)),
                amount: parse_accounting(fields.get(6)),
                unit: fields.owned(7),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
            },
        )
        .await
    }
}

/// Block 125 mix-scale decoder: `line_item` is the integer of field 3 and
/// `bun` its raw text (the accounting/field-3 source variant).
pub struct ScaleMixDecoder {
    out: mpsc::Sender<ScaleMix>,
}

impl ScaleMixDecoder {
    pub fn new(out: mpsc::Sender<ScaleMix>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for ScaleMixDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "125",
            ScaleMix {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                promo_id: fields.owned(2),
                line_item: to_i32(fields.get(3)),
                scale_qty: parse_accounting(fields.get(4)),
                bun: fields.owned(3),
                amount: parse_accounting(fields.get(6)),
                unit: fields.owned(7),
                per: parse_accounting(fields.get(8)),
                uom: fields.owned(9),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
                scale_qty_to: parse_accounting(fields.get(10)),
                amount_scl: parse_accounting(fields.get(11)),
                amount_scl_to: parse_accounting(fields.get(12)),
                unit_scl: fields.owned(13),
                matnr_kena: fields.owned(14),
            },
        )
        .await
    }
}

pub struct DealSchemaDecoder {
    out: mpsc::Sender<DealSchema>,
}

impl DealSchemaDecoder {
    pub fn new(out: mpsc::Sender<DealSchema>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for DealSchemaDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "126",
            DealSchema {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                step: fields.owned(3),
                counter: fields.owned(4),
                condition_type: fields.owned(5),
                description: fields.owned(6),
                valid_from: to_i32(fields.get(7)),
                valid_to: to_i32(fields.get(8)),
                cond_grp: fields.owned(9),
                drule: fields.owned(10),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
                disc_type: fields.owned(11),
            },
        )
        .await
    }
}

/// Block 130 fans out: the full record goes to the FG_ZDHDR staging channel
/// and its promo registration to the shared promo-check channel. An empty
/// condition type defaults to `ZNA0`.
pub struct FreeGoodsHeaderDecoder {
    out: mpsc::Sender<FreeGoodsHeader>,
    out_promo: mpsc::Sender<PromoCheck>,
}

impl FreeGoodsHeaderDecoder {
    pub fn new(out: mpsc::Sender<FreeGoodsHeader>, out_promo: mpsc::Sender<PromoCheck>) -> Self {
        Self { out, out_promo }
    }
}

#[async_trait]
impl Decoder for FreeGoodsHeaderDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        let mut condition_type = fields.owned(2);
        if condition_type.is_empty() {
            condition_type = "ZNA0".to_string();
        }
        let key_combination = fields.owned(3);
        let sales_organization = fields.owned(4);
        let distribution_channel = fields.owned(5);
        let division = fields.owned(6);
        let sales_office = fields.owned(7);
        let pricelist_type = fields.owned(8);
        let attribute1 = fields.owned(9);
        let industry_code3 = fields.owned(10);
        let industry_code4 = fields.owned(11);
        let industry_code5 = fields.owned(12);
        let sold_to_party = fields.owned(13);

        let keycomb = format!(
            "{condition_type}{key_combination}{sales_organization}{distribution_channel}\
             {division}{sales_office}{pricelist_type}{attribute1}{industry_code3}\
             {industry_code4}{industry_code5}{sold_to_party}"
        );

        let record = FreeGoodsHeader {
            process_id: process_id.to_string(),
            block_id: fields.owned(0),
            block_name: fields.owned(1),
            condition_type,
            key_combination,
            keycomb,
            sales_organization,
            distribution_channel,
            division,
            sales_office,
            pricelist_type,
            attribute1,
            industry_code3,
            industry_code4,
            industry_code5,
            sold_to_party,
            material: fields.owned(14),
            valid_until: parse_yyyymmdd(fields.get(15)),
            valid_from: parse_yyyymmdd(fields.get(16)),
            condition_record_no: fields.owned(17),
            promo_id: fields.owned(18),
            promo_item: fields.owned(19),
            scale: fields.owned(20),
            file_name: job.name.clone(),
            line_number: line_no,
            cdate: Local::now().naive_local(),
            must_buy: fields.owned(21),
            kelipatan: fields.owned(22),
            f_kelipatan: to_i32(fields.get(23)),
            with_qty: fields.owned(24),
            qty: to_i32(fields.get(25)),
            uom: parse_number(fields.get(26)),
            zterm: fields.owned(27),
            katr2: fields.owned(28),
            katr3: fields.owned(29),
            perbandingan: fields.owned(30),
            f_perbandingan1: to_i32(fields.get(31)),
            f_perbandingan2: to_i32(fields.get(32)),
            amountx: fields.owned(33),
        };

        let promo = PromoCheck {
            process_id: record.process_id.clone(),
            block_id: record.block_id.clone(),
            block_name: record.block_name.clone(),
            promo_id: record.promo_id.clone(),
            ddate: record.cdate.date(),
            cdate: record.cdate,
        };

        send_row(&self.out, "130", record).await?;
        send_row(&self.out_promo, "130", promo).await
    }
}

pub struct FreeGoodsDetailDecoder {
    out: mpsc::Sender<FreeGoodsDetail>,
}

impl FreeGoodsDetailDecoder {
    pub fn new(out: mpsc::Sender<FreeGoodsDetail>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for FreeGoodsDetailDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "131",
            FreeGoodsDetail {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                condition_record_no: fields.owned(2),
                minimum_qty: parse_number(fields.get(3)),
                free_goods_qty: parse_number(fields.get(4)),
                uom_free_goods: fields.owned(5),
                free_goods_agrred_qty: parse_number(fields.get(6)),
                uom_free_goods_agrred: fields.owned(7),
                additional_material: fields.owned(8),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
            },
        )
        .await
    }
}

pub struct FreeGoodsMixDecoder {
    out: mpsc::Sender<FreeGoodsMix>,
}

impl FreeGoodsMixDecoder {
    pub fn new(out: mpsc::Sender<FreeGoodsMix>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl Decoder for FreeGoodsMixDecoder {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()> {
        send_row(
            &self.out,
            "132",
            FreeGoodsMix {
                process_id: process_id.to_string(),
                block_id: fields.owned(0),
                block_name: fields.owned(1),
                promo_id: fields.owned(2),
                promo_item: fields.owned(3),
                scale_qty: parse_number(fields.get(4)),
                scale_qty_uom: fields.owned(5),
                material: fields.owned(6),
                qty: parse_accounting(fields.get(7)),
                qty_uom: fields.owned(8),
                file_name: job.name.clone(),
                line_number: line_no,
                cdate: Local::now().naive_local(),
                amount_sclf: parse_accounting(fields.get(9)),
                currency: fields.owned(10),
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
        FileJob::new(PathBuf::from("/in/SDEAL_001.txt"))
    }

    #[tokio::test]
    async fn deal_header_keycomb_uses_the_fixed_order() {
        let (tx, mut rx) = mpsc::channel(1);
        let decoder = DealHeaderDecoder::new(tx);

        let line = "120|ZDHDR|ZD01|K01|1000|10|SO1|DV|T30|CUST1|MAT1|A2|20241231|20240101|CRN1|X";
        let fields = Fields::split(line);
        decoder.handle(&fields, 3, &job(), "pid").await.unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.keycomb, "ZD01K01100010SO1DVT30CUST1A2");
        assert_eq!(
            row.valid_from,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            row.valid_until,
            chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(row.line_number, 3);
    }

    #[tokio::test]
    async fn promo_mix_fans_out_to_both_channels() {
        let (tx_main, mut rx_main) = mpsc::channel(1);
        let (tx_promo, mut rx_promo) = mpsc::channel(1);
        let decoder = PromoMixDecoder::new(tx_main, tx_promo);

        let line = "123|ZPMIX|ZP|K1|1000|10|SO|DV|C1|I2|I3|I4|I5|PL|PT|MAT|20241231|20240101|PRM1|2";
        let fields = Fields::split(line);
        decoder.handle(&fields, 1, &job(), "pid").await.unwrap();

        let main = rx_main.recv().await.unwrap();
        let promo = rx_promo.recv().await.unwrap();
        assert_eq!(main.promo_id, "PRM1");
        assert_eq!(promo.promo_id, "PRM1");
        assert_eq!(promo.ddate, main.cdate.date());
        assert_eq!(main.line_item, 2);
    }

    #[tokio::test]
    async fn free_goods_header_defaults_condition_type() {
        let (tx_main, mut rx_main) = mpsc::channel(1);
        let (tx_promo, mut rx_promo) = mpsc::channel(1);
        let decoder = FreeGoodsHeaderDecoder::new(tx_main, tx_promo);

        let line = "130|FGZDHDR||K1|1000|10|DV|SO|PL|A1|I3|I4|I5|STP|MAT|20240101|20241231|CRN|PRM|01|X";
        let fields = Fields::split(line);
        decoder.handle(&fields, 1, &job(), "pid").await.unwrap();

        let row = rx_main.recv().await.unwrap();
        assert_eq!(row.condition_type, "ZNA0");
        assert!(row.keycomb.starts_with("ZNA0K1"));
        assert!(rx_promo.recv().await.is_some());
    }

    #[tokio::test]
    async fn scale_mix_keeps_raw_bun_alongside_line_item() {
        let (tx, mut rx) = mpsc::channel(1);
        let decoder = ScaleMixDecoder::new(tx);

        let line = "125|ZSCMIX|PRM1|7|10,5||1.234,56|CAR|1|PC|20|30|40|KG|MATX";
        let fields = Fields::split(line);
        decoder.handle(&fields, 1, &job(), "pid").await.unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.line_item, 7);
        assert_eq!(row.bun, "7");
        assert_eq!(row.scale_qty, 10.5);
        assert_eq!(row.amount, 1234.56);
    }
}
