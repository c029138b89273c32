//! The shared import runner: globbing, channel wiring, worker fan-out and
//! the ordered shutdown sequence every block follows.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc, watch};
use tracing::{error, info};

use crate::decode::{DecoderRegistry, FileJob};
use crate::error::{FeedError, FeedResult};
use crate::metrics::{spawn_metrics_collector, spawn_progress};
use crate::pipeline::StepContext;
use crate::pipeline::files::count_lines;
use crate::pipeline::parser::{ParserShared, parse_worker};
use crate::writer::WriterHandle;

/// Capacity of the file-metric channel.
const METRICS_CAPACITY: usize = 100;

/// Per-block wiring produced by a block's build closure: the decoders the
/// block registers and the writers already spawned on the receiver halves.
pub struct ImportSetup {
    pub registry: DecoderRegistry,
    pub writers: Vec<WriterHandle>,
}

/// Runs one block import end to end.
///
/// The shutdown sequence is the heart of the contract: await every parser,
/// release the decoder registry (the only remaining senders) so each row
/// channel closes, await each writer in its fixed order, close the metric
/// stream and await the collector, then stop the progress renderer.
pub async fn run_import<F>(
    ctx: &StepContext,
    pattern: &str,
    worker_count: usize,
    build: F,
) -> FeedResult<()>
where
    F: FnOnce(&StepContext) -> ImportSetup,
{
    let glob_pattern = format!("{}/{}", ctx.config.file_path.display(), pattern);
    let mut files: Vec<_> = glob::glob(&glob_pattern)
        .map_err(|err| FeedError::configuration(format!("bad glob pattern: {err}")))?
        .filter_map(Result::ok)
        .collect();
    files.sort();

    if files.is_empty() {
        info!(pattern = %glob_pattern, "no input files, nothing to import");
        return Ok(());
    }

    let mut total_lines = 0i64;
    for file in &files {
        total_lines += count_lines(file).await?;
    }
    ctx.counters.reset(total_lines);
    info!(total_lines, files = files.len(), "import starting");

    let (job_tx, job_rx) = mpsc::channel::<FileJob>(files.len());
    let (metric_tx, metric_rx) = mpsc::channel(METRICS_CAPACITY);
    let (progress_tx, progress_rx) = watch::channel(false);

    let collector = spawn_metrics_collector(metric_rx);
    let progress = spawn_progress(ctx.counters.clone(), total_lines, progress_rx);

    let setup = build(ctx);
    let registry = Arc::new(setup.registry);

    let shared = Arc::new(ParserShared {
        registry: Arc::clone(&registry),
        counters: ctx.counters.clone(),
        metrics: metric_tx,
        process_id: ctx.process_id.clone(),
        success_dir: ctx.config.success_dir.clone(),
        failed_dir: ctx.config.failed_dir.clone(),
        shutdown: ctx.shutdown.clone(),
    });

    let jobs = Arc::new(Mutex::new(job_rx));
    let mut parsers = Vec::with_capacity(worker_count);
    for _ in 0..worker_count.max(1) {
        parsers.push(tokio::spawn(parse_worker(
            Arc::clone(&jobs),
            Arc::clone(&shared),
        )));
    }

    for file in files {
        let job = FileJob::new(file);
        if job_tx.send(job).await.is_err() {
            break;
        }
    }
    drop(job_tx);

    let mut first_error: Option<FeedError> = None;

    // Wait for every parser before any channel may close.
    for parser in parsers {
        match parser.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                error!(error = %err, "parse worker failed");
                first_error.get_or_insert(err);
            }
            Err(join_err) => {
                error!(error = %join_err, "parse worker panicked");
                first_error.get_or_insert(FeedError::from(join_err));
            }
        }
    }

    // The parsers are done and `shared` was their only registry handle
    // besides ours; dropping both closes every row channel. The metric
    // channel stays open until the writers have been awaited.
    let metric_guard = shared.metrics.clone();
    drop(shared);
    drop(registry);

    for writer in setup.writers {
        let name = writer.name;
        match writer.wait().await {
            Ok(rows) => info!(writer = name, rows, "writer drained"),
            Err(err) => {
                error!(writer = name, error = %err, "writer failed");
                first_error.get_or_insert(err);
            }
        }
    }

    drop(metric_guard);
    let files_reported = collector.await.unwrap_or(0);

    let _ = progress_tx.send(true);
    let _ = progress.await;

    info!(
        files = files_reported,
        inserted_rows = ctx.counters.inserted_rows(),
        "import finished"
    );

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
