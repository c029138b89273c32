//! The parse worker: pulls file jobs, scans lines, dispatches to decoders.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use tracing::warn;

use crate::concurrency::{ShutdownRx, is_shutdown};
use crate::decode::{DecoderRegistry, FileJob};
use crate::error::{ErrorKind, FeedError, FeedResult};
use crate::metrics::{FileMetric, RunCounters};
use crate::parse::Fields;
use crate::pipeline::files::move_file;

/// Initial scanner buffer.
const SCAN_BUFFER: usize = 64 * 1024;

/// Hard cap on a single line; longer lines fail the file's scan.
const MAX_LINE: usize = 20 * 1024 * 1024;

/// Immutable state shared by every parse worker of a block run.
pub struct ParserShared {
    pub registry: Arc<DecoderRegistry>,
    pub counters: Arc<RunCounters>,
    pub metrics: mpsc::Sender<FileMetric>,
    pub process_id: String,
    pub success_dir: PathBuf,
    pub failed_dir: PathBuf,
    pub shutdown: ShutdownRx,
}

/// Consumes jobs until the job channel drains. Files whose scan completes
/// move to the success directory; files whose scan fails move to the failed
/// directory and the worker continues with the next job. Cancellation aborts
/// without moving the current file.
pub async fn parse_worker(
    jobs: Arc<Mutex<mpsc::Receiver<FileJob>>>,
    shared: Arc<ParserShared>,
) -> FeedResult<()> {
    loop {
        let job = { jobs.lock().await.recv().await };
        let Some(job) = job else {
            return Ok(());
        };

        match parse_one_file(&job, &shared).await {
            Ok(()) => {
                if let Err(err) = move_file(&job.path, &shared.success_dir).await {
                    warn!(file = %job.name, error = %err, "failed to archive parsed file");
                }
            }
            Err(err) if err.is_cancelled() => return Err(err),
            Err(err) => {
                warn!(file = %job.name, error = %err, "file scan failed");
                if let Err(err) = move_file(&job.path, &shared.failed_dir).await {
                    warn!(file = %job.name, error = %err, "failed to quarantine file");
                }
            }
        }
    }
}

/// Scans one file line by line. Returns an error only for scanner-level
/// failures; per-line problems are counted and skipped.
async fn parse_one_file(job: &FileJob, shared: &ParserShared) -> FeedResult<()> {
    let started = Instant::now();
    let started_at = Local::now();

    let mut total_lines = 0i64;
    let mut parsed_rows = 0i64;
    let mut error_count = 0i64;

    let file = File::open(&job.path)
        .await
        .map_err(|err| FeedError::io(format!("open {}", job.path.display()), err))?;
    let mut reader = BufReader::with_capacity(SCAN_BUFFER, file);

    let mut line_number = 0i64;
    let mut buf: Vec<u8> = Vec::with_capacity(SCAN_BUFFER);

    loop {
        if is_shutdown(&shared.shutdown) {
            return Err(FeedError::cancelled());
        }

        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|err| FeedError::io(format!("read {}", job.path.display()), err))?;
        if n == 0 {
            break;
        }
        if buf.len() > MAX_LINE {
            return Err(FeedError::new(ErrorKind::LineTooLong {
                file: job.name.clone(),
                line_no: line_number + 1,
            }));
        }

        line_number += 1;
        total_lines += 1;
        shared.counters.inc_processed();

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        let fields = Fields::split(&line);
        if fields.len() < 2 {
            error_count += 1;
            continue;
        }

        let block_id = fields.get(0);
        let Some(decoder) = shared.registry.get(block_id) else {
            // Unknown block id: skipped without error.
            continue;
        };

        match decoder
            .handle(&fields, line_number, job, &shared.process_id)
            .await
        {
            Ok(()) => parsed_rows += 1,
            Err(_) => error_count += 1,
        }
    }

    let metric = FileMetric {
        file_name: job.name.clone(),
        started_at,
        finished_at: Local::now(),
        duration: started.elapsed(),
        total_lines,
        parsed_rows,
        error_count,
        status: "SUCCESS",
    };
    let _ = shared.metrics.send(metric).await;

    Ok(())
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let mut end = buf.len();
    if end > 0 && buf[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && buf[end - 1] == b'\r' {
        end -= 1;
    }
    &buf[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endings_are_stripped() {
        assert_eq!(trim_line_ending(b"a|b\n"), b"a|b");
        assert_eq!(trim_line_ending(b"a|b\r\n"), b"a|b");
        assert_eq!(trim_line_ending(b"a|b"), b"a|b");
        assert_eq!(trim_line_ending(b"\n"), b"");
    }
}
