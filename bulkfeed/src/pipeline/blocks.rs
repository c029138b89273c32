//! Per-block wiring: which decoders a block registers, which writers drain
//! its channels, and the block-code registry that assembles step chains.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::decode::*;
use crate::error::{FeedError, FeedResult};
use crate::finalize;
use crate::pipeline::import::{ImportSetup, run_import};
use crate::pipeline::{StepChain, StepContext};
use crate::writer::{AppendSpec, SqlRow, UpsertSpec, spawn_append, spawn_upsert, tables};

/// Wires a single-channel block around an append writer.
fn append_setup<R, D>(
    ctx: &StepContext,
    writer: &'static str,
    block_id: &'static str,
    spec: &'static AppendSpec,
    decoder: D,
) -> ImportSetup
where
    R: SqlRow + Send + 'static,
    D: FnOnce(mpsc::Sender<R>) -> Arc<dyn Decoder>,
{
    let (tx, rx) = mpsc::channel(ctx.config.buffer_size);
    let mut registry = DecoderRegistry::new();
    registry.register(block_id, decoder(tx));
    let writers = vec![spawn_append(
        writer,
        ctx.pool.clone(),
        spec,
        rx,
        ctx.counters.clone(),
        ctx.shutdown.clone(),
    )];
    ImportSetup { registry, writers }
}

/// Wires a single-channel block around an upsert writer.
fn upsert_setup<R, D>(
    ctx: &StepContext,
    writer: &'static str,
    block_id: &'static str,
    spec: &'static UpsertSpec,
    decoder: D,
) -> ImportSetup
where
    R: SqlRow + Send + 'static,
    D: FnOnce(mpsc::Sender<R>) -> Arc<dyn Decoder>,
{
    let (tx, rx) = mpsc::channel(ctx.config.buffer_size);
    let mut registry = DecoderRegistry::new();
    registry.register(block_id, decoder(tx));
    let writers = vec![spawn_upsert(
        writer,
        ctx.pool.clone(),
        spec,
        rx,
        ctx.counters.clone(),
        ctx.shutdown.clone(),
    )];
    ImportSetup { registry, writers }
}

pub async fn import_price_list(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MPRICE.txt", workers, |c| {
        append_setup(c, "price_list", "16", &tables::PRICE_LIST, |tx| {
            Arc::new(PriceListDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_price_group(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MPRICEGRP.txt", workers, |c| {
        upsert_setup(c, "price_group", "15", &tables::PRICE_GROUP, |tx| {
            Arc::new(PriceGroupDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_customer(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUST.txt", workers, |c| {
        upsert_setup(c, "customer", "01", &tables::CUSTOMER, |tx| {
            Arc::new(CustomerDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_product(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSKU.txt", workers, |c| {
        let uom_buy = c.config.uom_buy.clone();
        let uom_main = c.config.uom_main.clone();
        upsert_setup(c, "product", "25", &tables::PRODUCT, move |tx| {
            Arc::new(ProductDecoder::new(tx, &uom_buy, &uom_main))
        })
    })
    .await
}

pub async fn import_customer_group(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTGRP.txt", workers, |c| {
        upsert_setup(c, "customer_group", "02", &tables::CUSTOMER_GROUP, |tx| {
            Arc::new(CustomerGroupDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_industry(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTINDUS.txt", workers, |c| {
        upsert_setup(c, "industry", "05", &tables::INDUSTRY, |tx| {
            Arc::new(IndustryDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_outlet_type(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTTYPE.txt", workers, |c| {
        upsert_setup(c, "outlet_type", "03", &tables::OUTLET_TYPE, |tx| {
            Arc::new(OutletTypeDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_payment_term(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MTOP.txt", workers, |c| {
        upsert_setup(c, "payment_term", "07", &tables::PAYMENT_TERM, |tx| {
            Arc::new(PaymentTermDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_route(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MRUTE.txt", workers, |c| {
        upsert_setup(c, "route", "19", &tables::ROUTE, |tx| {
            Arc::new(RouteDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_salesman(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSALESMAN.txt", workers, |c| {
        upsert_setup(c, "salesman", "20", &tables::SALESMAN, |tx| {
            Arc::new(SalesmanDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_product_line(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSLINE.txt", workers, |c| {
        upsert_setup(c, "product_line", "22", &tables::PRODUCT_LINE, |tx| {
            Arc::new(ProductLineDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_brand(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSBRAND.txt", workers, |c| {
        upsert_setup(c, "brand", "23", &tables::BRAND, |tx| {
            Arc::new(BrandDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_receivable(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_ARINVOICE.txt", workers, |c| {
        upsert_setup(c, "receivable", "35", &tables::RECEIVABLE, |tx| {
            Arc::new(ReceivableDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_stock_balance(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_IMSTKBAL.txt", workers, |c| {
        upsert_setup(c, "stock_balance", "39", &tables::STOCK_BALANCE, |tx| {
            Arc::new(StockBalanceDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_sales_invoice(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_SLSINV.txt", workers, |c| {
        upsert_setup(c, "sales_invoice", "43", &tables::SALES_INVOICE, |tx| {
            Arc::new(SalesInvoiceDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_credit_limit(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTCL.txt", workers, |c| {
        upsert_setup(c, "credit_limit", "44", &tables::CREDIT_LIMIT, |tx| {
            Arc::new(CreditLimitDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_category(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MKAT.txt", workers, |c| {
        upsert_setup(c, "category", "46", &tables::CATEGORY, |tx| {
            Arc::new(CategoryDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_sub_brand(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSUBBRAND.txt", workers, |c| {
        upsert_setup(c, "sub_brand", "47", &tables::SUB_BRAND, |tx| {
            Arc::new(SubBrandDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_province(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MPROVINCE.txt", workers, |c| {
        upsert_setup(c, "province", "101", &tables::PROVINCE, |tx| {
            Arc::new(ProvinceDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_district(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MDISTRICT.txt", workers, |c| {
        upsert_setup(c, "district", "102", &tables::DISTRICT, |tx| {
            Arc::new(DistrictDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_beat(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MBEAT.txt", workers, |c| {
        upsert_setup(c, "beat", "103", &tables::BEAT, |tx| {
            Arc::new(BeatDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_rayon(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSUBBEAT.txt", workers, |c| {
        upsert_setup(c, "rayon", "104", &tables::RAYON, |tx| {
            Arc::new(RayonDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_market(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MMARKET.txt", workers, |c| {
        upsert_setup(c, "market", "105", &tables::MARKET, |tx| {
            Arc::new(MarketDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_back_order(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MBACKORDER.txt", workers, |c| {
        upsert_setup(c, "back_order", "108", &tables::BACK_ORDER_STATUS, |tx| {
            Arc::new(BackOrderStatusDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_ship_to(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MSHIPTO.txt", workers, |c| {
        upsert_setup(c, "ship_to", "109", &tables::SHIP_TO, |tx| {
            Arc::new(ShipToDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_payer_to(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MPAYERTO.txt", workers, |c| {
        upsert_setup(c, "payer_to", "110", &tables::PAYER_TO, |tx| {
            Arc::new(PayerToDecoder::new(tx))
        })
    })
    .await
}

pub async fn import_customer_invoice_header(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTINVH.txt", workers, |c| {
        upsert_setup(
            c,
            "customer_invoice_header",
            "111",
            &tables::CUSTOMER_INVOICE_HEADER,
            |tx| Arc::new(CustomerInvoiceHeaderDecoder::new(tx)),
        )
    })
    .await
}

pub async fn import_customer_invoice_detail(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MCUSTINVD.txt", workers, |c| {
        upsert_setup(
            c,
            "customer_invoice_detail",
            "112",
            &tables::CUSTOMER_INVOICE_DETAIL,
            |tx| Arc::new(CustomerInvoiceDetailDecoder::new(tx)),
        )
    })
    .await
}

pub async fn import_customer_price(ctx: StepContext) -> FeedResult<()> {
    let workers = ctx.config.worker_count;
    run_import(&ctx, "*_MKPLPRICE.txt", workers, |c| {
        append_setup(c, "customer_price", "113", &tables::CUSTOMER_PRICE, |tx| {
            Arc::new(CustomerPriceDecoder::new(tx))
        })
    })
    .await
}

/// The sales-deal feed: ten decoders, twelve writers, two fan-out channels.
/// Parser width is twice the CPU count instead of the configured worker
/// count.
pub async fn import_sales_deal(ctx: StepContext) -> FeedResult<()> {
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        * 2;

    run_import(&ctx, "SDEAL_*.txt", workers, |c| {
        let buffer = c.config.buffer_size;
        let pool = &c.pool;
        let counters = &c.counters;
        let shutdown = &c.shutdown;

        let (tx_hdr, rx_hdr) = mpsc::channel(buffer);
        let (tx_itm, rx_itm) = mpsc::channel(buffer);
        let (tx_det, rx_det) = mpsc::channel(buffer);
        let (tx_pmix, rx_pmix) = mpsc::channel(buffer);
        let (tx_pmix_promo, rx_pmix_promo) = mpsc::channel(buffer);
        let (tx_screg, rx_screg) = mpsc::channel(buffer);
        let (tx_scmix, rx_scmix) = mpsc::channel(buffer);
        let (tx_schema, rx_schema) = mpsc::channel(buffer);
        let (tx_fg_hdr, rx_fg_hdr) = mpsc::channel(buffer);
        let (tx_fg_promo, rx_fg_promo) = mpsc::channel(buffer);
        let (tx_fg_det, rx_fg_det) = mpsc::channel(buffer);
        let (tx_fg_mix, rx_fg_mix) = mpsc::channel(buffer);

        let mut registry = DecoderRegistry::new();
        registry.register("120", Arc::new(DealHeaderDecoder::new(tx_hdr)));
        registry.register("121", Arc::new(DealItemDecoder::new(tx_itm)));
        registry.register("122", Arc::new(DealDetailDecoder::new(tx_det)));
        registry.register("123", Arc::new(PromoMixDecoder::new(tx_pmix, tx_pmix_promo)));
        registry.register("124", Arc::new(ScaleRegularDecoder::new(tx_screg)));
        registry.register("125", Arc::new(ScaleMixDecoder::new(tx_scmix)));
        registry.register("126", Arc::new(DealSchemaDecoder::new(tx_schema)));
        registry.register(
            "130",
            Arc::new(FreeGoodsHeaderDecoder::new(tx_fg_hdr, tx_fg_promo)),
        );
        registry.register("131", Arc::new(FreeGoodsDetailDecoder::new(tx_fg_det)));
        registry.register("132", Arc::new(FreeGoodsMixDecoder::new(tx_fg_mix)));

        // Writer order here is the shutdown order.
        let writers = vec![
            spawn_append(
                "deal_header",
                pool.clone(),
                &tables::DEAL_HEADER,
                rx_hdr,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "deal_item",
                pool.clone(),
                &tables::DEAL_ITEM,
                rx_itm,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "deal_detail",
                pool.clone(),
                &tables::DEAL_DETAIL,
                rx_det,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_upsert(
                "promo_mix",
                pool.clone(),
                &tables::PROMO_MIX,
                rx_pmix,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_upsert(
                "promo_mix_check",
                pool.clone(),
                &tables::PROMO_CHECK,
                rx_pmix_promo,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_upsert(
                "scale_regular",
                pool.clone(),
                &tables::SCALE_REGULAR,
                rx_screg,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "scale_mix",
                pool.clone(),
                &tables::SCALE_MIX,
                rx_scmix,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "deal_schema",
                pool.clone(),
                &tables::DEAL_SCHEMA,
                rx_schema,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_upsert(
                "free_goods_header",
                pool.clone(),
                &tables::FREE_GOODS_HEADER,
                rx_fg_hdr,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_upsert(
                "free_goods_check",
                pool.clone(),
                &tables::PROMO_CHECK,
                rx_fg_promo,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "free_goods_detail",
                pool.clone(),
                &tables::FREE_GOODS_DETAIL,
                rx_fg_det,
                counters.clone(),
                shutdown.clone(),
            ),
            spawn_append(
                "free_goods_mix",
                pool.clone(),
                &tables::FREE_GOODS_MIX,
                rx_fg_mix,
                counters.clone(),
                shutdown.clone(),
            ),
        ];

        ImportSetup { registry, writers }
    })
    .await
}

/// Builds the step chain for a block code. Unknown codes are a startup
/// error.
pub fn build_chain(block: &str) -> FeedResult<StepChain> {
    let mut chain = StepChain::new();

    match block {
        "MPRICE" => {
            chain.add("IMPORT MPRICE", import_price_list);
            chain.add("FINALIZE MPRICE", finalize::finalize_price_list);
        }
        "MPRICEGRP" => chain.add("IMPORT MPRICEGRP", import_price_group),
        "MCUST" => chain.add("IMPORT MCUST", import_customer),
        "MSKU" => chain.add("IMPORT MSKU", import_product),
        "MCUSTGRP" => chain.add("IMPORT MCUSTGRP", import_customer_group),
        "MCUSTINDUS" => chain.add("IMPORT MCUSTINDUS", import_industry),
        "MCUSTTYPE" => chain.add("IMPORT MCUSTTYPE", import_outlet_type),
        "MTOP" => chain.add("IMPORT MTOP", import_payment_term),
        "MRUTE" => chain.add("IMPORT MRUTE", import_route),
        "MSALESMAN" => chain.add("IMPORT MSALESMAN", import_salesman),
        "MSLINE" => chain.add("IMPORT MSLINE", import_product_line),
        "MSBRAND" => chain.add("IMPORT MSBRAND", import_brand),
        "ARINVOICE" => chain.add("IMPORT ARINVOICE", import_receivable),
        "IMSTKBAL" => chain.add("IMPORT IMSTKBAL", import_stock_balance),
        "SLSINV" => chain.add("IMPORT SLSINV", import_sales_invoice),
        "MCUSTCL" => chain.add("IMPORT MCUSTCL", import_credit_limit),
        "MKAT" => chain.add("IMPORT MKAT", import_category),
        "MSUBBRAND" => chain.add("IMPORT MSUBBRAND", import_sub_brand),
        "MPROVINCE" => chain.add("IMPORT MPROVINCE", import_province),
        "MDISTRICT" => chain.add("IMPORT MDISTRICT", import_district),
        "MBEAT" => chain.add("IMPORT MBEAT", import_beat),
        "MSUBBEAT" => chain.add("IMPORT MSUBBEAT", import_rayon),
        "MMARKET" => chain.add("IMPORT MMARKET", import_market),
        "MBACKORDER" => chain.add("IMPORT MBACKORDER", import_back_order),
        "MSHIPTO" => chain.add("IMPORT MSHIPTO", import_ship_to),
        "MPAYERTO" => chain.add("IMPORT MPAYERTO", import_payer_to),
        "MCUSTINVH" => chain.add("IMPORT MCUSTINVH", import_customer_invoice_header),
        "MCUSTINVD" => chain.add("IMPORT MCUSTINVD", import_customer_invoice_detail),
        "MKPLPRICE" => {
            chain.add("IMPORT MKPLPRICE", import_customer_price);
            chain.add("FINALIZE MKPLPRICE", finalize::finalize_customer_price);
        }
        "SDEAL" => {
            chain.add("TRUNCATE SDEAL STAGING", finalize::truncate_sales_deal);
            chain.add("IMPORT SDEAL", import_sales_deal);
            chain.add("FINALIZE SDEAL", finalize::finalize_sales_deal);
        }
        other => return Err(FeedError::unknown_block(other)),
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn every_registered_block_builds_a_chain() {
        for block in [
            "MPRICE",
            "MPRICEGRP",
            "MCUST",
            "MSKU",
            "MCUSTGRP",
            "MCUSTINDUS",
            "MCUSTTYPE",
            "MTOP",
            "MRUTE",
            "MSALESMAN",
            "MSLINE",
            "MSBRAND",
            "ARINVOICE",
            "IMSTKBAL",
            "SLSINV",
            "MCUSTCL",
            "MKAT",
            "MSUBBRAND",
            "MPROVINCE",
            "MDISTRICT",
            "MBEAT",
            "MSUBBEAT",
            "MMARKET",
            "MBACKORDER",
            "MSHIPTO",
            "MPAYERTO",
            "MCUSTINVH",
            "MCUSTINVD",
            "MKPLPRICE",
            "SDEAL",
        ] {
            let chain = build_chain(block).unwrap();
            assert!(!chain.is_empty(), "{block} built an empty chain");
        }
    }

    #[test]
    fn finalize_blocks_have_two_steps() {
        assert_eq!(build_chain("MPRICE").unwrap().len(), 2);
        assert_eq!(build_chain("MKPLPRICE").unwrap().len(), 2);
        assert_eq!(build_chain("SDEAL").unwrap().len(), 3);
    }

    #[test]
    fn unknown_block_is_rejected() {
        let err = build_chain("NOPE").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownBlock { .. }));
    }
}
