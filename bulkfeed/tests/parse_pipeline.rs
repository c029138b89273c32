//! End-to-end tests of the parse worker fleet against real files on disk.
//!
//! These cover the file lifecycle (success / failed moves), per-line error
//! accounting, unknown-block skipping, fan-out, and cancellation, without a
//! database: the decoders' row channels are drained directly.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use bulkfeed::concurrency::create_shutdown;
use bulkfeed::decode::{
    CustomerGroupDecoder, DecoderRegistry, FileJob, FreeGoodsHeaderDecoder, PromoMixDecoder,
};
use bulkfeed::metrics::{FileMetric, RunCounters};
use bulkfeed::pipeline::parser::{ParserShared, parse_worker};
use bulkfeed::records::{CustomerGroup, FreeGoodsHeader, PromoCheck, PromoMix};
use tempfile::TempDir;

struct Harness {
    _dir: TempDir,
    input: PathBuf,
    success: PathBuf,
    failed: PathBuf,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let success = dir.path().join("success");
        let failed = dir.path().join("failed");
        for d in [&input, &success, &failed] {
            std::fs::create_dir_all(d).unwrap();
        }
        Harness {
            _dir: dir,
            input,
            success,
            failed,
        }
    }

    fn write_file(&self, name: &str, content: &str) -> FileJob {
        let path = self.input.join(name);
        std::fs::write(&path, content).unwrap();
        FileJob::new(path)
    }

    fn shared(
        &self,
        registry: DecoderRegistry,
        counters: Arc<RunCounters>,
        metrics: mpsc::Sender<FileMetric>,
        shutdown: bulkfeed::concurrency::ShutdownRx,
    ) -> Arc<ParserShared> {
        Arc::new(ParserShared {
            registry: Arc::new(registry),
            counters,
            metrics,
            process_id: "proc-1".to_string(),
            success_dir: self.success.clone(),
            failed_dir: self.failed.clone(),
            shutdown,
        })
    }
}

async fn run_workers(
    jobs: Vec<FileJob>,
    shared: Arc<ParserShared>,
    workers: usize,
) -> Vec<Result<(), bulkfeed::FeedError>> {
    let (job_tx, job_rx) = mpsc::channel(jobs.len().max(1));
    for job in jobs {
        job_tx.send(job).await.unwrap();
    }
    drop(job_tx);

    let job_rx = Arc::new(Mutex::new(job_rx));
    let mut handles = Vec::new();
    for _ in 0..workers {
        handles.push(tokio::spawn(parse_worker(
            Arc::clone(&job_rx),
            Arc::clone(&shared),
        )));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results
}

#[tokio::test]
async fn partial_failure_file_still_succeeds() {
    let harness = Harness::new();
    let job = harness.write_file(
        "001_MCUSTGRP.txt",
        "02|MCUSTGRP|G1|Alpha\nmalformed\n02|MCUSTGRP|G2|Beta\n02|MCUSTGRP|G3|Gamma\n02|MCUSTGRP|G4|Delta\n",
    );
    let file_name = job.name.clone();

    let (row_tx, mut row_rx) = mpsc::channel::<CustomerGroup>(16);
    let mut registry = DecoderRegistry::new();
    registry.register("02", Arc::new(CustomerGroupDecoder::new(row_tx)));

    let counters = RunCounters::new();
    let (metric_tx, mut metric_rx) = mpsc::channel(4);
    let (_shutdown_tx, shutdown) = create_shutdown();
    let shared = harness.shared(registry, counters.clone(), metric_tx, shutdown);

    let results = run_workers(vec![job], shared, 1).await;
    assert!(results.into_iter().all(|r| r.is_ok()));

    // Four of five lines decoded.
    let mut rows = Vec::new();
    while let Ok(row) = row_rx.try_recv() {
        rows.push(row);
    }
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.core_filename == file_name));

    // One metric, SUCCESS, with the malformed line counted.
    let metric = metric_rx.recv().await.unwrap();
    assert_eq!(metric.status, "SUCCESS");
    assert_eq!(metric.total_lines, 5);
    assert_eq!(metric.parsed_rows, 4);
    assert_eq!(metric.error_count, 1);

    // The file moved to the success directory and nowhere else.
    assert!(harness.success.join(&file_name).exists());
    assert!(!harness.failed.join(&file_name).exists());
    assert!(!harness.input.join(&file_name).exists());

    assert_eq!(counters.processed_lines(), 5);
}

#[tokio::test]
async fn unknown_block_lines_are_counted_but_not_emitted() {
    let harness = Harness::new();
    let job = harness.write_file(
        "001_MCUSTGRP.txt",
        "99|UNKNOWN|x|y\n02|MCUSTGRP|G1|Alpha\n",
    );

    let (row_tx, mut row_rx) = mpsc::channel::<CustomerGroup>(4);
    let mut registry = DecoderRegistry::new();
    registry.register("02", Arc::new(CustomerGroupDecoder::new(row_tx)));

    let counters = RunCounters::new();
    let (metric_tx, mut metric_rx) = mpsc::channel(4);
    let (_shutdown_tx, shutdown) = create_shutdown();
    let shared = harness.shared(registry, counters.clone(), metric_tx, shutdown);

    run_workers(vec![job], shared, 1).await;

    assert_eq!(row_rx.try_recv().unwrap().groupout, "G1");
    assert!(row_rx.try_recv().is_err());

    let metric = metric_rx.recv().await.unwrap();
    // The unknown line is processed but neither parsed nor an error.
    assert_eq!(metric.total_lines, 2);
    assert_eq!(metric.parsed_rows, 1);
    assert_eq!(metric.error_count, 0);
    assert_eq!(counters.processed_lines(), 2);
}

#[tokio::test]
async fn deal_fan_out_feeds_both_staging_and_promo_channels() {
    let harness = Harness::new();
    let job = harness.write_file(
        "SDEAL_001.txt",
        concat!(
            "123|ZPMIX|ZP|K1|1000|10|SO|DV|C1|I2|I3|I4|I5|PL|PT|MAT|20241231|20240101|PRM1|2\n",
            "130|FGZDHDR|ZC|K1|1000|10|DV|SO|PL|A1|I3|I4|I5|STP|MAT|20240101|20241231|CRN|PRM2|01|X\n",
        ),
    );

    let (pmix_tx, mut pmix_rx) = mpsc::channel::<PromoMix>(4);
    let (fg_tx, mut fg_rx) = mpsc::channel::<FreeGoodsHeader>(4);
    let (promo_tx, mut promo_rx) = mpsc::channel::<PromoCheck>(8);

    let mut registry = DecoderRegistry::new();
    registry.register(
        "123",
        Arc::new(PromoMixDecoder::new(pmix_tx, promo_tx.clone())),
    );
    registry.register("130", Arc::new(FreeGoodsHeaderDecoder::new(fg_tx, promo_tx)));

    let counters = RunCounters::new();
    let (metric_tx, _metric_rx) = mpsc::channel(4);
    let (_shutdown_tx, shutdown) = create_shutdown();
    let shared = harness.shared(registry, counters, metric_tx, shutdown);

    run_workers(vec![job], shared, 1).await;

    assert_eq!(pmix_rx.try_recv().unwrap().promo_id, "PRM1");
    assert_eq!(fg_rx.try_recv().unwrap().promo_id, "PRM2");

    // The shared promo channel saw one row from each source block.
    let mut promo_blocks: Vec<String> = Vec::new();
    while let Ok(row) = promo_rx.try_recv() {
        promo_blocks.push(row.block_id);
    }
    promo_blocks.sort();
    assert_eq!(promo_blocks, vec!["123".to_string(), "130".to_string()]);
}

#[tokio::test]
async fn files_spread_across_workers_each_get_one_metric() {
    let harness = Harness::new();
    let jobs: Vec<FileJob> = (0..4)
        .map(|i| {
            harness.write_file(
                &format!("{i:03}_MCUSTGRP.txt"),
                "02|MCUSTGRP|G|Name\n02|MCUSTGRP|H|Other\n",
            )
        })
        .collect();

    let (row_tx, mut row_rx) = mpsc::channel::<CustomerGroup>(32);
    let mut registry = DecoderRegistry::new();
    registry.register("02", Arc::new(CustomerGroupDecoder::new(row_tx)));

    let counters = RunCounters::new();
    let (metric_tx, mut metric_rx) = mpsc::channel(8);
    let (_shutdown_tx, shutdown) = create_shutdown();
    let shared = harness.shared(registry, counters.clone(), metric_tx, shutdown);

    run_workers(jobs, shared, 3).await;

    let mut metrics = Vec::new();
    while let Ok(metric) = metric_rx.try_recv() {
        metrics.push(metric);
    }
    assert_eq!(metrics.len(), 4);
    assert!(metrics.iter().all(|m| m.status == "SUCCESS"));

    let mut rows = 0;
    while row_rx.try_recv().is_ok() {
        rows += 1;
    }
    assert_eq!(rows, 8);
    assert_eq!(counters.processed_lines(), 8);
}

#[tokio::test]
async fn cancellation_aborts_without_moving_the_file() {
    let harness = Harness::new();
    let job = harness.write_file("001_MCUSTGRP.txt", "02|MCUSTGRP|G1|Alpha\n");
    let file_name = job.name.clone();

    let (row_tx, _row_rx) = mpsc::channel::<CustomerGroup>(4);
    let mut registry = DecoderRegistry::new();
    registry.register("02", Arc::new(CustomerGroupDecoder::new(row_tx)));

    let counters = RunCounters::new();
    let (metric_tx, mut metric_rx) = mpsc::channel(4);
    let (shutdown_tx, shutdown) = create_shutdown();
    shutdown_tx.send(true).unwrap();

    let shared = harness.shared(registry, counters, metric_tx, shutdown);
    let results = run_workers(vec![job], shared, 1).await;

    assert!(results[0].as_ref().unwrap_err().is_cancelled());
    // No metric for the aborted file, and the file stays in place.
    assert!(metric_rx.try_recv().is_err());
    assert!(harness.input.join(&file_name).exists());
}
