//! Writer specs for the sales-deal blocks (120-132).

use tiberius::TokenRow;

use crate::records::*;
use crate::writer::{AppendSpec, Dedup, SqlRow, UpsertSpec, bigint, date, datetime, float, int, text};

pub static DEAL_HEADER: AppendSpec = AppendSpec {
    table: "dbo.DP_ZDHDR",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONTYPE",
        "KEYCOMBINATION",
        "KEYCOMB",
        "SALESORGANIZATION",
        "DISTRIBUTIONCHANNEL",
        "SALESOFFICE",
        "DIVISION",
        "PAYMENTTERM",
        "CUSTOMER",
        "MATERIAL",
        "ATTRIBUT2",
        "VALIDUNTIL",
        "VALIDFROM",
        "CONDITIONRECORDNO",
        "SCALE",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
    ],
};

impl SqlRow for DealHeader {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_type));
        row.push(text(self.key_combination));
        row.push(text(self.keycomb));
        row.push(text(self.sales_organization));
        row.push(text(self.distribution_channel));
        row.push(text(self.sales_office));
        row.push(text(self.division));
        row.push(text(self.payment_term));
        row.push(text(self.customer));
        row.push(text(self.material));
        row.push(text(self.attribut2));
        row.push(date(self.valid_until));
        row.push(date(self.valid_from));
        row.push(text(self.condition_record_no));
        row.push(text(self.scale));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row
    }
}

pub static DEAL_ITEM: AppendSpec = AppendSpec {
    table: "dbo.DP_ZDITM",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONTYPE",
        "KEYCOMBINATION",
        "KEYCOMB",
        "SALESORGANIZATION",
        "DISTRIBUTIONCHANNEL",
        "SALESOFFICE",
        "DIVISION",
        "SOLDTOPARTY",
        "PRICINGREFMATL",
        "PAYMENTTERMS",
        "INDUSTRYCODE3",
        "INDUSTRYCODE4",
        "INDUSTRYCODE5",
        "ATTRIBUTE1",
        "ATTRIBUTE2",
        "MATERIAL",
        "SALESUNIT",
        "VALIDFROM",
        "VALIDUNTIL",
        "CONDITIONRECORDNO",
        "SCALE",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
    ],
};

impl SqlRow for DealItem {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_type));
        row.push(text(self.key_combination));
        row.push(text(self.keycomb));
        row.push(text(self.sales_organization));
        row.push(text(self.distribution_channel));
        row.push(text(self.sales_office));
        row.push(text(self.division));
        row.push(text(self.sold_to_party));
        row.push(text(self.pricing_ref_matl));
        row.push(text(self.payment_terms));
        row.push(text(self.industry_code3));
        row.push(text(self.industry_code4));
        row.push(text(self.industry_code5));
        row.push(text(self.attribute1));
        row.push(text(self.attribute2));
        row.push(text(self.material));
        row.push(text(self.sales_unit));
        row.push(date(self.valid_from));
        row.push(date(self.valid_until));
        row.push(text(self.condition_record_no));
        row.push(text(self.scale));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row
    }
}

pub static DEAL_DETAIL: AppendSpec = AppendSpec {
    table: "dbo.DP_ZDDET",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONRECORDNO",
        "AMOUNT",
        "UNIT",
        "PER",
        "UOM",
        "SCALE",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
    ],
};

impl SqlRow for DealDetail {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_record_no));
        row.push(float(self.amount));
        row.push(text(self.unit));
        row.push(float(self.per));
        row.push(text(self.uom));
        row.push(text(self.scale));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row
    }
}

pub static PROMO_MIX: UpsertSpec = UpsertSpec {
    target: "dbo.DP_ZPMIX",
    temp_table: "#tmp_DP_ZPMIX",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CTYP",
        "KEYCOMBINATION",
        "SORG",
        "DCHL",
        "SOFF",
        "DV",
        "CUSTOMER",
        "INDCODE2",
        "INDCODE3",
        "INDCODE4",
        "INDCODE5",
        "PL",
        "PAYT",
        "MATERIAL",
        "VALIDFROM",
        "VALIDUNTIL",
        "PROMOID",
        "LINEITEM",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
        "MUSTBUY",
        "EXCLUDE",
        "SPLIT",
        "AMOUNTX",
        "RANGEX",
        "WITHMATERIAL",
        "KELIPATAN",
        "V_KELIPATAN",
        "ATTR_PRD_LV2",
        "ATTR_PRD_LV3",
        "FL_CUST_EXC",
        "CUST_EXC",
        "FL_HD",
        "PERBANDINGAN",
        "V_PERBANDINGAN1",
        "V_PERBANDINGAN2",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_DP_ZPMIX (\n\
            PROCESS_ID NVARCHAR(50),\n\
            BLOCKID NVARCHAR(3),\n\
            BLOCKNAME NVARCHAR(50),\n\
            CTYP NVARCHAR(20),\n\
            KEYCOMBINATION NVARCHAR(20),\n\
            SORG NVARCHAR(20),\n\
            DCHL NVARCHAR(20),\n\
            SOFF NVARCHAR(20),\n\
            DV NVARCHAR(20),\n\
            CUSTOMER NVARCHAR(20),\n\
            INDCODE2 NVARCHAR(20),\n\
            INDCODE3 NVARCHAR(20),\n\
            INDCODE4 NVARCHAR(20),\n\
            INDCODE5 NVARCHAR(20),\n\
            PL NVARCHAR(20),\n\
            PAYT NVARCHAR(20),\n\
            MATERIAL NVARCHAR(20),\n\
            VALIDFROM DATE,\n\
            VALIDUNTIL DATE,\n\
            PROMOID NVARCHAR(20),\n\
            LINEITEM INT,\n\
            FILENAME NVARCHAR(200),\n\
            LINENUMBER BIGINT,\n\
            CDATE DATETIME,\n\
            MUSTBUY NVARCHAR(5),\n\
            EXCLUDE NVARCHAR(5),\n\
            SPLIT NVARCHAR(5),\n\
            AMOUNTX NVARCHAR(1),\n\
            RANGEX NVARCHAR(5),\n\
            WITHMATERIAL NVARCHAR(5),\n\
            KELIPATAN NVARCHAR(5),\n\
            V_KELIPATAN INT,\n\
            ATTR_PRD_LV2 NVARCHAR(20),\n\
            ATTR_PRD_LV3 NVARCHAR(20),\n\
            FL_CUST_EXC NVARCHAR(20),\n\
            CUST_EXC NVARCHAR(20),\n\
            FL_HD NVARCHAR(100),\n\
            PERBANDINGAN NVARCHAR(20),\n\
            V_PERBANDINGAN1 INT,\n\
            V_PERBANDINGAN2 INT\n\
        )",
    join_on: "\
        tgt.BLOCKID = src.BLOCKID AND tgt.PROMOID = src.PROMOID \
        AND tgt.LINEITEM = src.LINEITEM AND tgt.CTYP = src.CTYP \
        AND tgt.KEYCOMBINATION = src.KEYCOMBINATION AND tgt.SORG = src.SORG \
        AND tgt.DCHL = src.DCHL AND tgt.SOFF = src.SOFF AND tgt.DV = src.DV \
        AND tgt.CUSTOMER = src.CUSTOMER AND tgt.PL = src.PL \
        AND tgt.PAYT = src.PAYT AND tgt.MATERIAL = src.MATERIAL",
    update_set: "\
        tgt.PROCESS_ID = src.PROCESS_ID,\n\
        tgt.BLOCKID = src.BLOCKID,\n\
        tgt.BLOCKNAME = src.BLOCKNAME,\n\
        tgt.CTYP = src.CTYP,\n\
        tgt.KEYCOMBINATION = src.KEYCOMBINATION,\n\
        tgt.SORG = src.SORG,\n\
        tgt.DCHL = src.DCHL,\n\
        tgt.SOFF = src.SOFF,\n\
        tgt.DV = src.DV,\n\
        tgt.CUSTOMER = src.CUSTOMER,\n\
        tgt.INDCODE2 = src.INDCODE2,\n\
        tgt.INDCODE3 = src.INDCODE3,\n\
        tgt.INDCODE4 = src.INDCODE4,\n\
        tgt.INDCODE5 = src.INDCODE5,\n\
        tgt.PL = src.PL,\n\
        tgt.PAYT = src.PAYT,\n\
        tgt.MATERIAL = src.MATERIAL,\n\
        tgt.VALIDFROM = src.VALIDFROM,\n\
        tgt.VALIDUNTIL = src.VALIDUNTIL,\n\
        tgt.PROMOID = src.PROMOID,\n\
        tgt.LINEITEM = src.LINEITEM,\n\
        tgt.FILENAME = src.FILENAME,\n\
        tgt.LINENUMBER = src.LINENUMBER,\n\
        tgt.CDATE = src.CDATE,\n\
        tgt.MUSTBUY = src.MUSTBUY,\n\
        tgt.EXCLUDE = src.EXCLUDE,\n\
        tgt.SPLIT = src.SPLIT,\n\
        tgt.AMOUNTX = src.AMOUNTX,\n\
        tgt.RANGEX = src.RANGEX,\n\
        tgt.WITHMATERIAL = src.WITHMATERIAL,\n\
        tgt.KELIPATAN = src.KELIPATAN,\n\
        tgt.V_KELIPATAN = src.V_KELIPATAN,\n\
        tgt.ATTR_PRD_LV2 = src.ATTR_PRD_LV2,\n\
        tgt.ATTR_PRD_LV3 = src.ATTR_PRD_LV3,\n\
        tgt.FL_CUST_EXC = src.FL_CUST_EXC,\n\
        tgt.CUST_EXC = src.CUST_EXC,\n\
        tgt.FL_HD = src.FL_HD,\n\
        tgt.PERBANDINGAN = src.PERBANDINGAN,\n\
        tgt.V_PERBANDINGAN1 = src.V_PERBANDINGAN1,\n\
        tgt.V_PERBANDINGAN2 = src.V_PERBANDINGAN2",
    dedup: Dedup::RowNumber(
        "src.BLOCKID, src.PROMOID, src.LINEITEM, src.CTYP, src.KEYCOMBINATION, \
         src.SORG, src.DCHL, src.SOFF, src.DV, src.CUSTOMER, src.PL, src.PAYT, \
         src.MATERIAL",
    ),
};

impl SqlRow for PromoMix {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.ctyp));
        row.push(text(self.key_combination));
        row.push(text(self.sorg));
        row.push(text(self.dchl));
        row.push(text(self.soff));
        row.push(text(self.dv));
        row.push(text(self.customer));
        row.push(text(self.indcode2));
        row.push(text(self.indcode3));
        row.push(text(self.indcode4));
        row.push(text(self.indcode5));
        row.push(text(self.pl));
        row.push(text(self.payt));
        row.push(text(self.material));
        row.push(date(self.valid_from));
        row.push(date(self.valid_until));
        row.push(text(self.promo_id));
        row.push(int(self.line_item));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row.push(text(self.must_buy));
        row.push(text(self.exclude));
        row.push(text(self.split));
        row.push(text(self.amountx));
        row.push(text(self.rangex));
        row.push(text(self.with_material));
        row.push(text(self.kelipatan));
        row.push(int(self.v_kelipatan));
        row.push(text(self.attr_prd_lv2));
        row.push(text(self.attr_prd_lv3));
        row.push(text(self.fl_cust_exc));
        row.push(text(self.cust_exc));
        row.push(text(self.fl_hd));
        row.push(text(self.perbandingan));
        row.push(int(self.v_perbandingan1));
        row.push(int(self.v_perbandingan2));
        row
    }
}

/// Shared promo registration table fed by the fan-out channels of blocks 123
/// and 130.
pub static PROMO_CHECK: UpsertSpec = UpsertSpec {
    target: "dbo.DP_FG_CHECK",
    temp_table: "#tmp_DP_FG_CHECK",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "PROMOID",
        "DDATE",
        "CDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_DP_FG_CHECK (\n\
            PROCESS_ID NVARCHAR(255),\n\
            BLOCKID NVARCHAR(255),\n\
            BLOCKNAME NVARCHAR(255),\n\
            PROMOID NVARCHAR(255),\n\
            DDATE DATE,\n\
            CDATE DATETIME\n\
        )",
    join_on: "\
        tgt.BLOCKID = src.BLOCKID AND tgt.PROMOID = src.PROMOID \
        AND tgt.DDATE = src.DDATE",
    update_set: "\
        tgt.PROCESS_ID = src.PROCESS_ID,\n\
        tgt.BLOCKID = src.BLOCKID,\n\
        tgt.BLOCKNAME = src.BLOCKNAME,\n\
        tgt.PROMOID = src.PROMOID,\n\
        tgt.DDATE = src.DDATE,\n\
        tgt.CDATE = src.CDATE",
    dedup: Dedup::RowNumber("src.BLOCKID, src.PROMOID, src.DDATE"),
};

impl SqlRow for PromoCheck {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.promo_id));
        row.push(date(self.ddate));
        row.push(datetime(self.cdate));
        row
    }
}

pub static SCALE_REGULAR: UpsertSpec = UpsertSpec {
    target: "dbo.DP_ZSCREG",
    temp_table: "#tmp_DP_ZSCREG",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONRECORDNO",
        "NO",
        "LSNO",
        "DISCREGHDRQTY",
        "AMOUNT",
        "UNIT",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_DP_ZSCREG (\n\
            PROCESS_ID NVARCHAR(50),\n\
            BLOCKID NVARCHAR(3),\n\
            BLOCKNAME NVARCHAR(50),\n\
            CONDITIONRECORDNO NVARCHAR(20),\n\
            NO INT,\n\
            LSNO INT,\n\
            DISCREGHDRQTY FLOAT,\n\
            AMOUNT FLOAT,\n\
            UNIT NVARCHAR(25),\n\
            FILENAME NVARCHAR(200),\n\
            LINENUMBER BIGINT,\n\
            CDATE DATETIME\n\
        )",
    join_on: "\
        tgt.BLOCKID = src.BLOCKID AND tgt.CONDITIONRECORDNO = src.CONDITIONRECORDNO \
        AND tgt.DISCREGHDRQTY = src.DISCREGHDRQTY",
    update_set: "\
        tgt.PROCESS_ID = src.PROCESS_ID,\n\
        tgt.BLOCKID = src.BLOCKID,\n\
        tgt.BLOCKNAME = src.BLOCKNAME,\n\
        tgt.CONDITIONRECORDNO = src.CONDITIONRECORDNO,\n\
        tgt.NO = src.NO,\n\
        tgt.LSNO = src.LSNO,\n\
        tgt.DISCREGHDRQTY = src.DISCREGHDRQTY,\n\
        tgt.AMOUNT = src.AMOUNT,\n\
        tgt.UNIT = src.UNIT,\n\
        tgt.FILENAME = src.FILENAME,\n\
        tgt.LINENUMBER = src.LINENUMBER,\n\
        tgt.CDATE = src.CDATE",
    dedup: Dedup::RowNumber("src.BLOCKID, src.CONDITIONRECORDNO, src.DISCREGHDRQTY"),
};

impl SqlRow for ScaleRegular {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_record_no));
        row.push(int(self.no));
        row.push(int(self.lsno));
        row.push(float(self.disc_reg_hdr_qty));
        row.push(float(self.amount));
        row.push(text(self.unit));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row
    }
}

pub static SCALE_MIX: AppendSpec = AppendSpec {
    table: "dbo.DP_ZSCMIX",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "PROMOID",
        "LINEITEM",
        "SCALEQTY",
        "BUN",
        "AMOUNT",
        "UNIT",
        "PER",
        "UOM",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
        "SCALEQTYTO",
        "AMOUNTSCL",
        "AMOUNTSCLTO",
        "UNITSCL",
        "MATNRKENA",
    ],
};

impl SqlRow for ScaleMix {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.promo_id));
        row.push(int(self.line_item));
        row.push(float(self.scale_qty));
        row.push(text(self.bun));
        row.push(float(self.amount));
        row.push(text(self.unit));
        row.push(float(self.per));
        row.push(text(self.uom));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row.push(float(self.scale_qty_to));
        row.push(float(self.amount_scl));
        row.push(float(self.amount_scl_to));
        row.push(text(self.unit_scl));
        row.push(text(self.matnr_kena));
        row
    }
}

pub static DEAL_SCHEMA: AppendSpec = AppendSpec {
    table: "dbo.DP_Z00001",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "STEP",
        "COUNTER",
        "CONDITIONTYPE",
        "DESCRIPTION",
        "VALIDFROM",
        "VALIDTO",
        "CONDGRP",
        "DRULE",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
        "DISCTYPE",
    ],
};

impl SqlRow for DealSchema {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.step));
        row.push(text(self.counter));
        row.push(text(self.condition_type));
        row.push(text(self.description));
        row.push(int(self.valid_from));
        row.push(int(self.valid_to));
        row.push(text(self.cond_grp));
        row.push(text(self.drule));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row.push(text(self.disc_type));
        row
    }
}

pub static FREE_GOODS_HEADER: UpsertSpec = UpsertSpec {
    target: "dbo.FG_ZDHDR",
    temp_table: "#tmp_FG_ZDHDR",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONTYPE",
        "KEYCOMBINATION",
        "KEYCOMB",
        "SALESORGANIZATION",
        "DISTRIBUTIONCHANNEL",
        "DIVISION",
        "SALESOFFICE",
        "PRICELISTTYPE",
        "ATTRIBUTE1",
        "INDUSTRYCODE3",
        "INDUSTRYCODE4",
        "INDUSTRYCODE5",
        "SOLDTOPARTY",
        "MATERIAL",
        "VALIDUNTIL",
        "VALIDFROM",
        "CONDITIONRECORDNO",
        "PROMOID",
        "PROMOITEM",
        "SCALE",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
        "MUSTBUY",
        "KELIPATAN",
        "F_KELIPATAN",
        "WITHQTY",
        "QTY",
        "UOM",
        "ZTERM",
        "KATR2",
        "KATR3",
        "PERBANDINGAN",
        "F_PERBANDINGAN1",
        "F_PERBANDINGAN2",
        "AMOUNTX",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_FG_ZDHDR (\n\
            PROCESS_ID NVARCHAR(50),\n\
            BLOCKID NVARCHAR(3),\n\
            BLOCKNAME NVARCHAR(50),\n\
            CONDITIONTYPE NVARCHAR(20),\n\
            KEYCOMBINATION NVARCHAR(20),\n\
            KEYCOMB NVARCHAR(180),\n\
            SALESORGANIZATION NVARCHAR(20),\n\
            DISTRIBUTIONCHANNEL NVARCHAR(20),\n\
            DIVISION NVARCHAR(20),\n\
            SALESOFFICE NVARCHAR(20),\n\
            PRICELISTTYPE NVARCHAR(20),\n\
            ATTRIBUTE1 NVARCHAR(20),\n\
            INDUSTRYCODE3 NVARCHAR(20),\n\
            INDUSTRYCODE4 NVARCHAR(20),\n\
            INDUSTRYCODE5 NVARCHAR(20),\n\
            SOLDTOPARTY NVARCHAR(20),\n\
            MATERIAL NVARCHAR(20),\n\
            VALIDUNTIL DATE,\n\
            VALIDFROM DATE,\n\
            CONDITIONRECORDNO NVARCHAR(20),\n\
            PROMOID NVARCHAR(20),\n\
            PROMOITEM NVARCHAR(20),\n\
            [SCALE] NVARCHAR(3),\n\
            FILENAME NVARCHAR(100),\n\
            LINENUMBER BIGINT,\n\
            CDATE DATETIME,\n\
            MUSTBUY NVARCHAR(5),\n\
            KELIPATAN NVARCHAR(5),\n\
            F_KELIPATAN INT,\n\
            WITHQTY NVARCHAR(20),\n\
            QTY INT,\n\
            UOM FLOAT,\n\
            ZTERM NVARCHAR(5),\n\
            KATR2 NVARCHAR(20),\n\
            KATR3 NVARCHAR(20),\n\
            PERBANDINGAN NVARCHAR(20),\n\
            F_PERBANDINGAN1 INT,\n\
            F_PERBANDINGAN2 INT,\n\
            AMOUNTX NVARCHAR(1)\n\
        )",
    join_on: "\
        tgt.BLOCKID = src.BLOCKID AND tgt.PROMOID = src.PROMOID \
        AND tgt.PROMOITEM = src.PROMOITEM \
        AND tgt.CONDITIONRECORDNO = src.CONDITIONRECORDNO \
        AND tgt.CONDITIONTYPE = src.CONDITIONTYPE \
        AND tgt.KEYCOMBINATION = src.KEYCOMBINATION \
        AND tgt.SALESORGANIZATION = src.SALESORGANIZATION \
        AND tgt.DISTRIBUTIONCHANNEL = src.DISTRIBUTIONCHANNEL \
        AND tgt.DIVISION = src.DIVISION AND tgt.SALESOFFICE = src.SALESOFFICE \
        AND tgt.PRICELISTTYPE = src.PRICELISTTYPE \
        AND tgt.ATTRIBUTE1 = src.ATTRIBUTE1 \
        AND tgt.INDUSTRYCODE3 = src.INDUSTRYCODE3 \
        AND tgt.INDUSTRYCODE4 = src.INDUSTRYCODE4 \
        AND tgt.INDUSTRYCODE5 = src.INDUSTRYCODE5 \
        AND tgt.SOLDTOPARTY = src.SOLDTOPARTY AND tgt.MATERIAL = src.MATERIAL \
        AND tgt.ZTERM = src.ZTERM AND tgt.KATR2 = src.KATR2 \
        AND tgt.KATR3 = src.KATR3",
    update_set: "\
        tgt.PROCESS_ID = src.PROCESS_ID,\n\
        tgt.BLOCKID = src.BLOCKID,\n\
        tgt.BLOCKNAME = src.BLOCKNAME,\n\
        tgt.CONDITIONTYPE = src.CONDITIONTYPE,\n\
        tgt.KEYCOMBINATION = src.KEYCOMBINATION,\n\
        tgt.KEYCOMB = src.KEYCOMB,\n\
        tgt.SALESORGANIZATION = src.SALESORGANIZATION,\n\
        tgt.DISTRIBUTIONCHANNEL = src.DISTRIBUTIONCHANNEL,\n\
        tgt.DIVISION = src.DIVISION,\n\
        tgt.SALESOFFICE = src.SALESOFFICE,\n\
        tgt.PRICELISTTYPE = src.PRICELISTTYPE,\n\
        tgt.ATTRIBUTE1 = src.ATTRIBUTE1,\n\
        tgt.INDUSTRYCODE3 = src.INDUSTRYCODE3,\n\
        tgt.INDUSTRYCODE4 = src.INDUSTRYCODE4,\n\
        tgt.INDUSTRYCODE5 = src.INDUSTRYCODE5,\n\
        tgt.SOLDTOPARTY = src.SOLDTOPARTY,\n\
        tgt.MATERIAL = src.MATERIAL,\n\
        tgt.VALIDUNTIL = src.VALIDUNTIL,\n\
        tgt.VALIDFROM = src.VALIDFROM,\n\
        tgt.CONDITIONRECORDNO = src.CONDITIONRECORDNO,\n\
        tgt.PROMOID = src.PROMOID,\n\
        tgt.PROMOITEM = src.PROMOITEM,\n\
        tgt.[SCALE] = src.[SCALE],\n\
        tgt.FILENAME = src.FILENAME,\n\
        tgt.LINENUMBER = src.LINENUMBER,\n\
        tgt.CDATE = src.CDATE,\n\
        tgt.MUSTBUY = src.MUSTBUY,\n\
        tgt.KELIPATAN = src.KELIPATAN,\n\
        tgt.F_KELIPATAN = src.F_KELIPATAN,\n\
        tgt.WITHQTY = src.WITHQTY,\n\
        tgt.QTY = src.QTY,\n\
        tgt.UOM = src.UOM,\n\
        tgt.ZTERM = src.ZTERM,\n\
        tgt.KATR2 = src.KATR2,\n\
        tgt.KATR3 = src.KATR3,\n\
        tgt.PERBANDINGAN = src.PERBANDINGAN,\n\
        tgt.F_PERBANDINGAN1 = src.F_PERBANDINGAN1,\n\
        tgt.F_PERBANDINGAN2 = src.F_PERBANDINGAN2,\n\
        tgt.AMOUNTX = src.AMOUNTX",
    dedup: Dedup::RowNumber(
        "src.BLOCKID, src.PROMOID, src.PROMOITEM, src.CONDITIONRECORDNO, \
         src.CONDITIONTYPE, src.KEYCOMBINATION, src.SALESORGANIZATION, \
         src.DISTRIBUTIONCHANNEL, src.DIVISION, src.SALESOFFICE, \
         src.PRICELISTTYPE, src.ATTRIBUTE1, src.INDUSTRYCODE3, \
         src.INDUSTRYCODE4, src.INDUSTRYCODE5, src.SOLDTOPARTY, src.MATERIAL, \
         src.ZTERM, src.KATR2, src.KATR3",
    ),
};

impl SqlRow for FreeGoodsHeader {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_type));
        row.push(text(self.key_combination));
        row.push(text(self.keycomb));
        row.push(text(self.sales_organization));
        row.push(text(self.distribution_channel));
        row.push(text(self.division));
        row.push(text(self.sales_office));
        row.push(text(self.pricelist_type));
        row.push(text(self.attribute1));
        row.push(text(self.industry_code3));
        row.push(text(self.industry_code4));
        row.push(text(self.industry_code5));
        row.push(text(self.sold_to_party));
        row.push(text(self.material));
        row.push(date(self.valid_until));
        row.push(date(self.valid_from));
        row.push(text(self.condition_record_no));
        row.push(text(self.promo_id));
        row.push(text(self.promo_item));
        row.push(text(self.scale));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row.push(text(self.must_buy));
        row.push(text(self.kelipatan));
        row.push(int(self.f_kelipatan));
        row.push(text(self.with_qty));
        row.push(int(self.qty));
        row.push(float(self.uom));
        row.push(text(self.zterm));
        row.push(text(self.katr2));
        row.push(text(self.katr3));
        row.push(text(self.perbandingan));
        row.push(int(self.f_perbandingan1));
        row.push(int(self.f_perbandingan2));
        row.push(text(self.amountx));
        row
    }
}

pub static FREE_GOODS_DETAIL: AppendSpec = AppendSpec {
    table: "dbo.FG_ZFRDET",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "CONDITIONRECORDNO",
        "MINIMUMQTY",
        "FREEGOODSQTY",
        "UOMFREEGOODS",
        "FREEGOODSAGRREDQTY",
        "UOMFREEGOODSAGRRED",
        "ADDITIONALMATERIAL",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
    ],
};

impl SqlRow for FreeGoodsDetail {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.condition_record_no));
        row.push(float(self.minimum_qty));
        row.push(float(self.free_goods_qty));
        row.push(text(self.uom_free_goods));
        row.push(float(self.free_goods_agrred_qty));
        row.push(text(self.uom_free_goods_agrred));
        row.push(text(self.additional_material));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row
    }
}

pub static FREE_GOODS_MIX: AppendSpec = AppendSpec {
    table: "dbo.FG_ZFRMIX",
    columns: &[
        "PROCESS_ID",
        "BLOCKID",
        "BLOCKNAME",
        "PROMOID",
        "PROMOITEM",
        "SCALEQTY",
        "SCALEQTYUOM",
        "MATERIAL",
        "QTY",
        "QTYUOM",
        "FILENAME",
        "LINENUMBER",
        "CDATE",
        "AMOUNTSCLF",
        "CURRENCY",
    ],
};

impl SqlRow for FreeGoodsMix {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.process_id));
        row.push(text(self.block_id));
        row.push(text(self.block_name));
        row.push(text(self.promo_id));
        row.push(text(self.promo_item));
        row.push(float(self.scale_qty));
        row.push(text(self.scale_qty_uom));
        row.push(text(self.material));
        row.push(float(self.qty));
        row.push(text(self.qty_uom));
        row.push(text(self.file_name));
        row.push(bigint(self.line_number));
        row.push(datetime(self.cdate));
        row.push(float(self.amount_sclf));
        row.push(text(self.currency));
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::sql::build_merge;

    #[test]
    fn promo_mix_column_count() {
        assert_eq!(PROMO_MIX.columns.len(), 40);
    }

    #[test]
    fn free_goods_header_column_count() {
        assert_eq!(FREE_GOODS_HEADER.columns.len(), 39);
    }

    #[test]
    fn promo_check_merge_targets_shared_table() {
        let sql = build_merge(&PROMO_CHECK);
        assert!(sql.contains("MERGE dbo.DP_FG_CHECK WITH (HOLDLOCK) AS tgt"));
        assert!(sql.contains("PARTITION BY src.BLOCKID, src.PROMOID, src.DDATE"));
    }

    #[test]
    fn scale_keyword_is_bracketed_in_free_goods_clauses() {
        assert!(FREE_GOODS_HEADER.temp_ddl.contains("[SCALE]"));
        assert!(FREE_GOODS_HEADER.update_set.contains("tgt.[SCALE] = src.[SCALE]"));
    }
}
