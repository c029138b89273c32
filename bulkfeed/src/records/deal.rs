//! Sales-deal staging records (blocks 120-132).
//!
//! All deal records carry the run's process id, the source file name and
//! line number; the finalize procedure drains the staging tables scoped by
//! process id.

use chrono::{NaiveDate, NaiveDateTime};

/// Block 120 — deal header appended to `dbo.DP_ZDHDR`.
#[derive(Debug, Clone)]
pub struct DealHeader {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_type: String,
    pub key_combination: String,
    pub keycomb: String,
    pub sales_organization: String,
    pub distribution_channel: String,
    pub sales_office: String,
    pub division: String,
    pub payment_term: String,
    pub customer: String,
    pub material: String,
    pub attribut2: String,
    pub valid_until: NaiveDate,
    pub valid_from: NaiveDate,
    pub condition_record_no: String,
    pub scale: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
}

/// Block 121 — deal item appended to `dbo.DP_ZDITM`.
#[derive(Debug, Clone)]
pub struct DealItem {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_type: String,
    pub key_combination: String,
    pub keycomb: String,
    pub sales_organization: String,
    pub distribution_channel: String,
    pub sales_office: String,
    pub division: String,
    pub sold_to_party: String,
    pub pricing_ref_matl: String,
    pub payment_terms: String,
    pub industry_code3: String,
    pub industry_code4: String,
    pub industry_code5: String,
    pub attribute1: String,
    pub attribute2: String,
    pub material: String,
    pub sales_unit: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub condition_record_no: String,
    pub scale: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
}

/// Block 122 — deal condition detail appended to `dbo.DP_ZDDET`.
#[derive(Debug, Clone)]
pub struct DealDetail {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_record_no: String,
    pub amount: f64,
    pub unit: String,
    pub per: f64,
    pub uom: String,
    pub scale: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
}

/// Block 123 — promo mix upserted into `dbo.DP_ZPMIX`; the same record also
/// feeds the shared `dbo.DP_FG_CHECK` promo table.
#[derive(Debug, Clone)]
pub struct PromoMix {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub ctyp: String,
    pub key_combination: String,
    pub sorg: String,
    pub dchl: String,
    pub soff: String,
    pub dv: String,
    pub customer: String,
    pub indcode2: String,
    pub indcode3: String,
    pub indcode4: String,
    pub indcode5: String,
    pub pl: String,
    pub payt: String,
    pub material: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub promo_id: String,
    pub line_item: i32,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
    pub must_buy: String,
    pub exclude: String,
    pub split: String,
    pub amountx: String,
    pub rangex: String,
    pub with_material: String,
    pub kelipatan: String,
    pub v_kelipatan: i32,
    pub attr_prd_lv2: String,
    pub attr_prd_lv3: String,
    pub fl_cust_exc: String,
    pub cust_exc: String,
    pub fl_hd: String,
    pub perbandingan: String,
    pub v_perbandingan1: i32,
    pub v_perbandingan2: i32,
}

/// Promo registration row carried on the fan-out channel of blocks 123 and
/// 130 and MERGEd into the shared `dbo.DP_FG_CHECK` table.
#[derive(Debug, Clone)]
pub struct PromoCheck {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub promo_id: String,
    pub ddate: NaiveDate,
    pub cdate: NaiveDateTime,
}

/// Block 124 — regular scale upserted into `dbo.DP_ZSCREG`.
#[derive(Debug, Clone)]
pub struct ScaleRegular {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_record_no: String,
    pub no: i32,
    pub lsno: i32,
    pub disc_reg_hdr_qty: f64,
    pub amount: f64,
    pub unit: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
}

/// Block 125 — mix scale appended to `dbo.DP_ZSCMIX`.
#[derive(Debug, Clone)]
pub struct ScaleMix {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub promo_id: String,
    pub line_item: i32,
    pub scale_qty: f64,
    pub bun: String,
    pub amount: f64,
    pub unit: String,
    pub per: f64,
    pub uom: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
    pub scale_qty_to: f64,
    pub amount_scl: f64,
    pub amount_scl_to: f64,
    pub unit_scl: String,
    pub matnr_kena: String,
}

/// Block 126 — deal schema appended to `dbo.DP_Z00001`.
#[derive(Debug, Clone)]
pub struct DealSchema {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub step: String,
    pub counter: String,
    pub condition_type: String,
    pub description: String,
    pub valid_from: i32,
    pub valid_to: i32,
    pub cond_grp: String,
    pub drule: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
    pub disc_type: String,
}

/// Block 130 — free-goods header upserted into `dbo.FG_ZDHDR`; also feeds
/// `dbo.DP_FG_CHECK`.
#[derive(Debug, Clone)]
pub struct FreeGoodsHeader {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_type: String,
    pub key_combination: String,
    pub keycomb: String,
    pub sales_organization: String,
    pub distribution_channel: String,
    pub division: String,
    pub sales_office: String,
    pub pricelist_type: String,
    pub attribute1: String,
    pub industry_code3: String,
    pub industry_code4: String,
    pub industry_code5: String,
    pub sold_to_party: String,
    pub material: String,
    pub valid_until: NaiveDate,
    pub valid_from: NaiveDate,
    pub condition_record_no: String,
    pub promo_id: String,
    pub promo_item: String,
    pub scale: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
    pub must_buy: String,
    pub kelipatan: String,
    pub f_kelipatan: i32,
    pub with_qty: String,
    pub qty: i32,
    pub uom: f64,
    pub zterm: String,
    pub katr2: String,
    pub katr3: String,
    pub perbandingan: String,
    pub f_perbandingan1: i32,
    pub f_perbandingan2: i32,
    pub amountx: String,
}

/// Block 131 — free-goods detail appended to `dbo.FG_ZFRDET`.
#[derive(Debug, Clone)]
pub struct FreeGoodsDetail {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub condition_record_no: String,
    pub minimum_qty: f64,
    pub free_goods_qty: f64,
    pub uom_free_goods: String,
    pub free_goods_agrred_qty: f64,
    pub uom_free_goods_agrred: String,
    pub additional_material: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
}

/// Block 132 — free-goods mix appended to `dbo.FG_ZFRMIX`.
#[derive(Debug, Clone)]
pub struct FreeGoodsMix {
    pub process_id: String,
    pub block_id: String,
    pub block_name: String,
    pub promo_id: String,
    pub promo_item: String,
    pub scale_qty: f64,
    pub scale_qty_uom: String,
    pub material: String,
    pub qty: f64,
    pub qty_uom: String,
    pub file_name: String,
    pub line_number: i64,
    pub cdate: NaiveDateTime,
    pub amount_sclf: f64,
    pub currency: String,
}
