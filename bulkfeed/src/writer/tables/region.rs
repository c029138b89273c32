//! Writer specs for the region / customer-topology blocks (101-113).

use tiberius::TokenRow;

use crate::records::*;
use crate::writer::{AppendSpec, Dedup, SqlRow, UpsertSpec, bigint, datetime, float, text};

pub static PROVINCE: UpsertSpec = UpsertSpec {
    target: "dbo.fprovinsi",
    temp_table: "#tmp_fprovinsi",
    columns: &[
        "PROVINSI_ID",
        "PROVINSI_NAME",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fprovinsi (\n\
            PROVINSI_ID NVARCHAR(255),\n\
            PROVINSI_NAME NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.PROVINSI_ID = src.PROVINSI_ID",
    update_set: "\
        tgt.PROVINSI_ID = src.PROVINSI_ID,\n\
        tgt.PROVINSI_NAME = src.PROVINSI_NAME,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for Province {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.provinsi_id));
        row.push(text(self.provinsi_name));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static DISTRICT: UpsertSpec = UpsertSpec {
    target: "dbo.fdistrik",
    temp_table: "#tmp_fdistrik",
    columns: &[
        "KODECABANG",
        "DISTRIK",
        "DISTRIKNAME",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fdistrik (\n\
            KODECABANG NVARCHAR(255),\n\
            DISTRIK NVARCHAR(255),\n\
            DISTRIKNAME NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.DISTRIK = src.DISTRIK AND tgt.KODECABANG = src.KODECABANG",
    update_set: "\
        tgt.KODECABANG = src.KODECABANG,\n\
        tgt.DISTRIK = src.DISTRIK,\n\
        tgt.DISTRIKNAME = src.DISTRIKNAME,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for District {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.kodecabang));
        row.push(text(self.distrik));
        row.push(text(self.distrik_name));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static BEAT: UpsertSpec = UpsertSpec {
    target: "dbo.gm_cust_wilayah",
    temp_table: "#tmp_gm_cust_wilayah",
    columns: &[
        "wc_district_id",
        "wc_wilayah_id",
        "wc_wilayah_desc",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_gm_cust_wilayah (\n\
            wc_district_id NVARCHAR(255),\n\
            wc_wilayah_id NVARCHAR(255),\n\
            wc_wilayah_desc NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.wc_district_id = src.wc_district_id AND tgt.wc_wilayah_id = src.wc_wilayah_id",
    update_set: "\
        tgt.wc_district_id = src.wc_district_id,\n\
        tgt.wc_wilayah_id = src.wc_wilayah_id,\n\
        tgt.wc_wilayah_desc = src.wc_wilayah_desc,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for Beat {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.wc_district_id));
        row.push(text(self.wc_wilayah_id));
        row.push(text(self.wc_wilayah_desc));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static RAYON: UpsertSpec = UpsertSpec {
    target: "dbo.gm_cust_rayon",
    temp_table: "#tmp_gm_cust_rayon",
    columns: &[
        "rc_district_id",
        "rc_wilayah_id",
        "rc_rayon_id",
        "rc_rayon_desc",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_gm_cust_rayon (\n\
            rc_district_id NVARCHAR(255),\n\
            rc_wilayah_id NVARCHAR(255),\n\
            rc_rayon_id NVARCHAR(255),\n\
            rc_rayon_desc NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "\
        tgt.rc_district_id = src.rc_district_id \
        AND tgt.rc_wilayah_id = src.rc_wilayah_id \
        AND tgt.rc_rayon_id = src.rc_rayon_id",
    update_set: "\
        tgt.rc_district_id = src.rc_district_id,\n\
        tgt.rc_wilayah_id = src.rc_wilayah_id,\n\
        tgt.rc_rayon_id = src.rc_rayon_id,\n\
        tgt.rc_rayon_desc = src.rc_rayon_desc,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for Rayon {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.rc_district_id));
        row.push(text(self.rc_wilayah_id));
        row.push(text(self.rc_rayon_id));
        row.push(text(self.rc_rayon_desc));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static MARKET: UpsertSpec = UpsertSpec {
    target: "dbo.gm_cust_market",
    temp_table: "#tmp_gm_cust_market",
    columns: &[
        "psr_pasar_id",
        "psr_long_desc",
        "psr_short_desc",
        "kodecabang",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_gm_cust_market (\n\
            psr_pasar_id NVARCHAR(255),\n\
            psr_long_desc NVARCHAR(255),\n\
            psr_short_desc NVARCHAR(255),\n\
            kodecabang NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.psr_pasar_id = src.psr_pasar_id AND tgt.kodecabang = src.kodecabang",
    update_set: "\
        tgt.psr_pasar_id = src.psr_pasar_id,\n\
        tgt.psr_long_desc = src.psr_long_desc,\n\
        tgt.psr_short_desc = src.psr_short_desc,\n\
        tgt.kodecabang = src.kodecabang,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for Market {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.psr_pasar_id));
        row.push(text(self.psr_long_desc));
        row.push(text(self.psr_short_desc));
        row.push(text(self.kodecabang));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static BACK_ORDER_STATUS: UpsertSpec = UpsertSpec {
    target: "dbo.forder_hd_status",
    temp_table: "#tmp_forder_hd_status",
    columns: &[
        "TGLORDER",
        "ORDERNO",
        "SLSNO",
        "CUSTNO",
        "KODECABANG",
        "ORDERNO_TOPUP",
        "PCODE",
        "STATUS",
        "STATUS_DETAIL",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_forder_hd_status (\n\
            TGLORDER NVARCHAR(255),\n\
            ORDERNO NVARCHAR(255),\n\
            SLSNO NVARCHAR(255),\n\
            CUSTNO NVARCHAR(255),\n\
            KODECABANG NVARCHAR(255),\n\
            ORDERNO_TOPUP NVARCHAR(255),\n\
            PCODE NVARCHAR(255),\n\
            STATUS NVARCHAR(255),\n\
            STATUS_DETAIL NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "\
        tgt.TGLORDER = src.TGLORDER AND tgt.ORDERNO = src.ORDERNO \
        AND tgt.SLSNO = src.SLSNO AND tgt.CUSTNO = src.CUSTNO \
        AND tgt.KODECABANG = src.KODECABANG \
        AND tgt.ORDERNO_TOPUP = src.ORDERNO_TOPUP AND tgt.PCODE = src.PCODE",
    update_set: "\
        tgt.TGLORDER = src.TGLORDER,\n\
        tgt.ORDERNO = src.ORDERNO,\n\
        tgt.SLSNO = src.SLSNO,\n\
        tgt.CUSTNO = src.CUSTNO,\n\
        tgt.KODECABANG = src.KODECABANG,\n\
        tgt.ORDERNO_TOPUP = src.ORDERNO_TOPUP,\n\
        tgt.PCODE = src.PCODE,\n\
        tgt.STATUS = src.STATUS,\n\
        tgt.STATUS_DETAIL = src.STATUS_DETAIL,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for BackOrderStatus {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.tgl_order));
        row.push(text(self.orderno));
        row.push(text(self.slsno));
        row.push(text(self.custno));
        row.push(text(self.kodecabang));
        row.push(text(self.orderno_topup));
        row.push(text(self.pcode));
        row.push(text(self.status));
        row.push(text(self.status_detail));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static SHIP_TO: UpsertSpec = UpsertSpec {
    target: "dbo.fshippto",
    temp_table: "#tmp_fshippto",
    columns: &[
        "CUSTNO",
        "CUSTNO_SHIP",
        "DESC_CUSTNO_SHIP",
        "KODECABANG",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fshippto (\n\
            CUSTNO NVARCHAR(255),\n\
            CUSTNO_SHIP NVARCHAR(255),\n\
            DESC_CUSTNO_SHIP NVARCHAR(255),\n\
            KODECABANG NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.CUSTNO = src.CUSTNO AND tgt.KODECABANG = src.KODECABANG",
    update_set: "\
        tgt.CUSTNO = src.CUSTNO,\n\
        tgt.CUSTNO_SHIP = src.CUSTNO_SHIP,\n\
        tgt.DESC_CUSTNO_SHIP = src.DESC_CUSTNO_SHIP,\n\
        tgt.KODECABANG = src.KODECABANG,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for ShipTo {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.custno));
        row.push(text(self.custno_ship));
        row.push(text(self.desc_custno_ship));
        row.push(text(self.kodecabang));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static PAYER_TO: UpsertSpec = UpsertSpec {
    target: "dbo.FMST_PAYTO",
    temp_table: "#tmp_fmst_payto",
    columns: &[
        "CUSTNO",
        "CUSTNO_BIL",
        "DESC_CUSTNO_BIL",
        "KODECABANG",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fmst_payto (\n\
            CUSTNO NVARCHAR(255),\n\
            CUSTNO_BIL NVARCHAR(255),\n\
            DESC_CUSTNO_BIL NVARCHAR(255),\n\
            KODECABANG NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.KODECABANG = src.KODECABANG AND tgt.CUSTNO = src.CUSTNO",
    update_set: "\
        tgt.CUSTNO = src.CUSTNO,\n\
        tgt.CUSTNO_BIL = src.CUSTNO_BIL,\n\
        tgt.DESC_CUSTNO_BIL = src.DESC_CUSTNO_BIL,\n\
        tgt.KODECABANG = src.KODECABANG,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for PayerTo {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.custno));
        row.push(text(self.custno_bil));
        row.push(text(self.desc_custno_bil));
        row.push(text(self.kodecabang));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static CUSTOMER_INVOICE_HEADER: UpsertSpec = UpsertSpec {
    target: "dbo.fmst_custinv_h",
    temp_table: "#tmp_fmst_custinv_h",
    columns: &[
        "BID",
        "BNAME",
        "MUID",
        "MUNAME",
        "CUSTNO",
        "CUSTNAME",
        "INV_TOTAL",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fmst_custinv_h (\n\
            BID NVARCHAR(255),\n\
            BNAME NVARCHAR(255),\n\
            MUID NVARCHAR(255),\n\
            MUNAME NVARCHAR(255),\n\
            CUSTNO NVARCHAR(255),\n\
            CUSTNAME NVARCHAR(255),\n\
            INV_TOTAL NVARCHAR(255),\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "tgt.BID = src.BID AND tgt.MUID = src.MUID AND tgt.CUSTNO = src.CUSTNO",
    update_set: "\
        tgt.BID = src.BID,\n\
        tgt.BNAME = src.BNAME,\n\
        tgt.MUID = src.MUID,\n\
        tgt.MUNAME = src.MUNAME,\n\
        tgt.CUSTNO = src.CUSTNO,\n\
        tgt.CUSTNAME = src.CUSTNAME,\n\
        tgt.INV_TOTAL = src.INV_TOTAL,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for CustomerInvoiceHeader {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.bid));
        row.push(text(self.bname));
        row.push(text(self.mu_id));
        row.push(text(self.mu_name));
        row.push(text(self.custno));
        row.push(text(self.custname));
        row.push(text(self.inv_total));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static CUSTOMER_INVOICE_DETAIL: UpsertSpec = UpsertSpec {
    target: "dbo.fmst_custinv_d",
    temp_table: "#tmp_fmst_custinv_d",
    columns: &[
        "BID",
        "BNAME",
        "MUID",
        "MUNAME",
        "CUSTNO",
        "CUSTNAME",
        "INVNO",
        "INVDATE",
        "DUEDATE",
        "INV_AMOUNT",
        "INV_OUTSTANDING",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
    temp_ddl: "\
        CREATE TABLE #tmp_fmst_custinv_d (\n\
            BID NVARCHAR(255),\n\
            BNAME NVARCHAR(255),\n\
            MUID NVARCHAR(255),\n\
            MUNAME NVARCHAR(255),\n\
            CUSTNO NVARCHAR(255),\n\
            CUSTNAME NVARCHAR(255),\n\
            INVNO NVARCHAR(255),\n\
            INVDATE NVARCHAR(255),\n\
            DUEDATE NVARCHAR(255),\n\
            INV_AMOUNT FLOAT,\n\
            INV_OUTSTANDING FLOAT,\n\
            CORE_FILENAME NVARCHAR(255),\n\
            CORE_PROCESSDATE DATETIME\n\
        )",
    join_on: "\
        tgt.BID = src.BID AND tgt.MUID = src.MUID \
        AND tgt.CUSTNO = src.CUSTNO AND tgt.INVNO = src.INVNO",
    update_set: "\
        tgt.BID = src.BID,\n\
        tgt.BNAME = src.BNAME,\n\
        tgt.MUID = src.MUID,\n\
        tgt.MUNAME = src.MUNAME,\n\
        tgt.CUSTNO = src.CUSTNO,\n\
        tgt.CUSTNAME = src.CUSTNAME,\n\
        tgt.INVNO = src.INVNO,\n\
        tgt.INVDATE = src.INVDATE,\n\
        tgt.DUEDATE = src.DUEDATE,\n\
        tgt.INV_AMOUNT = src.INV_AMOUNT,\n\
        tgt.INV_OUTSTANDING = src.INV_OUTSTANDING,\n\
        tgt.CORE_FILENAME = src.CORE_FILENAME,\n\
        tgt.CORE_PROCESSDATE = src.CORE_PROCESSDATE",
    dedup: Dedup::Distinct,
};

impl SqlRow for CustomerInvoiceDetail {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.bid));
        row.push(text(self.bname));
        row.push(text(self.mu_id));
        row.push(text(self.mu_name));
        row.push(text(self.custno));
        row.push(text(self.custname));
        row.push(text(self.invno));
        row.push(text(self.invdate));
        row.push(text(self.duedate));
        row.push(float(self.inv_amount));
        row.push(float(self.inv_outstanding));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}

pub static CUSTOMER_PRICE: AppendSpec = AppendSpec {
    table: "dbo.mkplprice_dummy",
    columns: &[
        "UNIQ_ID",
        "LINE_NO",
        "CUST_CODE",
        "BRANCH_ID",
        "PCODE",
        "PRICE_VALUE",
        "PRICE_UOM",
        "CBY",
        "CDATE",
        "MBY",
        "MDATE",
        "CORE_FILENAME",
        "CORE_PROCESSDATE",
    ],
};

impl SqlRow for CustomerPrice {
    fn into_row(self) -> TokenRow<'static> {
        let mut row = TokenRow::new();
        row.push(text(self.uniq_id));
        row.push(bigint(self.line_no));
        row.push(text(self.cust_code));
        row.push(text(self.branch_id));
        row.push(text(self.pcode));
        row.push(float(self.price_value));
        row.push(text(self.price_uom));
        row.push(text(self.cby));
        row.push(datetime(self.cdate));
        row.push(text(self.mby));
        row.push(datetime(self.mdate));
        row.push(text(self.core_filename));
        row.push(datetime(self.core_process_date));
        row
    }
}
