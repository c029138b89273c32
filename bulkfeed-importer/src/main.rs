//! Batch importer binary.
//!
//! One invocation runs one block: parse its feed files into the warehouse
//! and, where the block defines one, the idempotent finalize step. Exit
//! status is non-zero on the first step error.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{error, info, warn};
use uuid::Uuid;

use bulkfeed::concurrency::create_shutdown;
use bulkfeed::error::FeedResult;
use bulkfeed::metrics::RunCounters;
use bulkfeed::pipeline::blocks::build_chain;
use bulkfeed::pipeline::files::ensure_dir;
use bulkfeed::pipeline::StepContext;
use bulkfeed_config::Config;
use bulkfeed_mssql::MssqlPool;

/// Feed importer for the master-data / sales-deal warehouse.
#[derive(Parser, Debug)]
#[command(name = "bulkfeed-importer", version)]
struct Cli {
    /// Block to run, e.g. MPRICE or SDEAL.
    #[arg(long)]
    block: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let block = cli.block.trim().to_string();
    if block.is_empty() {
        eprintln!("no block specified");
        return ExitCode::FAILURE;
    }

    let config = match Config::load() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = bulkfeed_telemetry::init_tracing("importer", &config.log_dir);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(block, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "IMPORT FAILED");
            ExitCode::FAILURE
        }
    }
}

async fn run(block: String, config: Arc<Config>) -> FeedResult<()> {
    let started = Instant::now();

    // Fail on unknown blocks before touching the database.
    let chain = build_chain(&block)?;

    for dir in config.working_dirs() {
        ensure_dir(dir).await?;
    }

    if config.ftp.is_configured() {
        info!(
            host = %config.ftp.host,
            remote_dir = %config.ftp.remote_dir,
            "ingress endpoint configured; downloads are handled by the external fetcher"
        );
    }

    let pool = MssqlPool::connect(
        &config.database,
        config.worker_count + 2,
        config.worker_count,
        Duration::from_secs(config.timeout_minutes * 60),
    )
    .await?;

    let process_id = Uuid::new_v4().to_string();
    info!(process_id = %process_id, block = %block, "run starting");

    let (shutdown_tx, shutdown) = create_shutdown();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling run");
            let _ = shutdown_tx.send(true);
        }
    });

    let ctx = StepContext {
        config,
        pool,
        counters: RunCounters::new(),
        process_id,
        shutdown,
    };

    chain.run(ctx).await?;

    info!(elapsed = ?started.elapsed(), "ALL IMPORTS COMPLETED");
    Ok(())
}
