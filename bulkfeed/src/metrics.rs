//! Run-scoped counters, per-file metrics and the progress renderer.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

/// Counters for one import run.
///
/// Scoped to the run rather than the process so repeated invocations within
/// one process stay isolated. `inserted_rows` is advanced by the writers in
/// batches of 1000 plus a final remainder, so concurrent reads underestimate
/// by at most 999 per writer.
#[derive(Debug, Default)]
pub struct RunCounters {
    total_lines: AtomicI64,
    processed_lines: AtomicI64,
    inserted_rows: AtomicI64,
}

impl RunCounters {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Resets the counters at the start of a block import.
    pub fn reset(&self, total_lines: i64) {
        self.total_lines.store(total_lines, Ordering::Relaxed);
        self.processed_lines.store(0, Ordering::Relaxed);
    }

    pub fn inc_processed(&self) {
        self.processed_lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_inserted(&self, n: i64) {
        self.inserted_rows.fetch_add(n, Ordering::Relaxed);
    }

    pub fn total_lines(&self) -> i64 {
        self.total_lines.load(Ordering::Relaxed)
    }

    pub fn processed_lines(&self) -> i64 {
        self.processed_lines.load(Ordering::Relaxed)
    }

    pub fn inserted_rows(&self) -> i64 {
        self.inserted_rows.load(Ordering::Relaxed)
    }
}

/// Per-file parse outcome. One is emitted for every file whose scan
/// completed, regardless of per-line errors.
#[derive(Debug, Clone)]
pub struct FileMetric {
    pub file_name: String,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub duration: Duration,
    pub total_lines: i64,
    pub parsed_rows: i64,
    pub error_count: i64,
    pub status: &'static str,
}

/// Drains the file-metric channel, logging one summary block per file.
/// Returns the number of files reported.
pub fn spawn_metrics_collector(mut rx: mpsc::Receiver<FileMetric>) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut files = 0u64;
        while let Some(m) = rx.recv().await {
            files += 1;
            info!(
                file = %m.file_name,
                status = m.status,
                lines = m.total_lines,
                parsed_rows = m.parsed_rows,
                errors = m.error_count,
                duration_ms = m.duration.as_millis() as u64,
                "file metrics"
            );
        }
        files
    })
}

/// Renders a progress bar off the run counters every 500 ms until the done
/// signal fires, then draws the final position and finishes.
pub fn spawn_progress(
    counters: Arc<RunCounters>,
    total: i64,
    mut done: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if total <= 0 {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30}] {percent:>3}% | {pos}/{len} rows | {per_sec} | {elapsed}")
                .expect("invalid progress bar template")
                .progress_chars("#-"),
        );

        let mut ticker = tokio::time::interval(Duration::from_millis(500));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let current = counters.processed_lines().clamp(0, total);
                    bar.set_position(current as u64);
                }
                changed = done.changed() => {
                    let finished = changed.is_err() || *done.borrow();
                    if finished {
                        let current = counters.processed_lines().clamp(0, total);
                        bar.set_position(current as u64);
                        bar.finish();
                        return;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_reset_keeps_inserted_rows() {
        let counters = RunCounters::new();
        counters.add_inserted(1000);
        counters.inc_processed();
        counters.reset(50);

        assert_eq!(counters.total_lines(), 50);
        assert_eq!(counters.processed_lines(), 0);
        assert_eq!(counters.inserted_rows(), 1000);
    }

    #[tokio::test]
    async fn collector_counts_every_metric() {
        let (tx, rx) = mpsc::channel(8);
        let handle = spawn_metrics_collector(rx);

        for i in 0..3 {
            let now = Local::now();
            tx.send(FileMetric {
                file_name: format!("file_{i}.txt"),
                started_at: now,
                finished_at: now,
                duration: Duration::from_millis(5),
                total_lines: 10,
                parsed_rows: 9,
                error_count: 1,
                status: "SUCCESS",
            })
            .await
            .unwrap();
        }
        drop(tx);

        assert_eq!(handle.await.unwrap(), 3);
    }
}
