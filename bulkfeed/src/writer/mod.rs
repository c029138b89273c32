//! Bulk writers: raw append into staging tables and MERGE upsert via a
//! session-scoped temp table.
//!
//! Each writer drains one typed row channel inside a single transaction on a
//! dedicated connection. Append writers stream straight into the target;
//! upsert writers stream into a temp table, then MERGE with `HOLDLOCK` from
//! a de-duplicated projection. At-most-once commit, no retry: a failed block
//! is rerun wholesale.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tiberius::{ColumnData, IntoSql, SqlBulkCopyOptions, TokenRow};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use bulkfeed_mssql::{MssqlPool, PooledClient};

use crate::concurrency::{ShutdownRx, is_shutdown};
use crate::error::{ErrorKind, FeedError, FeedResult};
use crate::metrics::RunCounters;

pub mod sql;
pub mod tables;

/// Counter flush granularity: `inserted_rows` advances in batches of this
/// size plus a final remainder.
const COUNTER_BATCH: i64 = 1000;

/// Projects a staging record into one bulk-copy row. Value order must match
/// the owning spec's column list.
pub trait SqlRow: Send + 'static {
    fn into_row(self) -> TokenRow<'static>;
}

/// Immutable description of a raw append target.
pub struct AppendSpec {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// De-duplication strategy for the MERGE source projection.
pub enum Dedup {
    /// `SELECT DISTINCT` over the full column set.
    Distinct,
    /// `ROW_NUMBER() OVER (PARTITION BY <cols> ORDER BY <cols>) = 1`.
    /// Columns carry the `src.` prefix.
    RowNumber(&'static str),
}

/// Immutable description of a MERGE upsert target.
pub struct UpsertSpec {
    pub target: &'static str,
    pub temp_table: &'static str,
    pub columns: &'static [&'static str],
    pub temp_ddl: &'static str,
    pub join_on: &'static str,
    pub update_set: &'static str,
    pub dedup: Dedup,
}

/// Join handle of a spawned writer, labeled for ordered shutdown logging.
pub struct WriterHandle {
    pub name: &'static str,
    pub handle: JoinHandle<FeedResult<u64>>,
}

impl WriterHandle {
    /// Awaits the writer and surfaces its result.
    pub async fn wait(self) -> FeedResult<u64> {
        self.handle.await.map_err(|err| {
            FeedError::with_source(
                ErrorKind::WorkerPanicked {
                    worker: self.name.to_string(),
                },
                err,
            )
        })?
    }
}

/// Spawns a raw append writer draining `rx` into `spec.table`.
pub fn spawn_append<R: SqlRow>(
    name: &'static str,
    pool: MssqlPool,
    spec: &'static AppendSpec,
    rx: mpsc::Receiver<R>,
    counters: Arc<RunCounters>,
    shutdown: ShutdownRx,
) -> WriterHandle {
    let handle = tokio::spawn(async move {
        bulk_append(&pool, spec, rx, counters, shutdown).await
    });
    WriterHandle { name, handle }
}

/// Spawns an upsert writer draining `rx` through `spec.temp_table` into
/// `spec.target`.
pub fn spawn_upsert<R: SqlRow>(
    name: &'static str,
    pool: MssqlPool,
    spec: &'static UpsertSpec,
    rx: mpsc::Receiver<R>,
    counters: Arc<RunCounters>,
    shutdown: ShutdownRx,
) -> WriterHandle {
    let handle = tokio::spawn(async move {
        bulk_upsert(&pool, spec, rx, counters, shutdown).await
    });
    WriterHandle { name, handle }
}

/// Streams records into `spec.table` inside one transaction.
pub async fn bulk_append<R: SqlRow>(
    pool: &MssqlPool,
    spec: &AppendSpec,
    mut rx: mpsc::Receiver<R>,
    counters: Arc<RunCounters>,
    shutdown: ShutdownRx,
) -> FeedResult<u64> {
    let mut conn = pool.acquire().await?;

    match append_inner(&mut conn, spec, &mut rx, &counters, &shutdown).await {
        Ok(rows) => {
            info!(writer = spec.table, rows, "bulk append completed");
            Ok(rows)
        }
        Err(err) => {
            error!(writer = spec.table, error = %err, columns = ?spec.columns, "bulk append failed");
            // The dropped connection rolls the open transaction back.
            conn.discard();
            Err(err)
        }
    }
}

async fn append_inner<R: SqlRow>(
    conn: &mut PooledClient,
    spec: &AppendSpec,
    rx: &mut mpsc::Receiver<R>,
    counters: &RunCounters,
    shutdown: &ShutdownRx,
) -> FeedResult<u64> {
    exec_batch(conn, "BEGIN TRAN").await?;

    let mut rows = 0u64;
    let mut batch = 0i64;
    {
        let mut load = conn
            .client_mut()
            .bulk_insert_with_options(
                spec.table,
                spec.columns,
                SqlBulkCopyOptions::default(),
                &[],
            )
            .await
            .map_err(|err| bulk_copy_error(spec.table, spec.columns, 0, err))?;

        while let Some(record) = rx.recv().await {
            if is_shutdown(shutdown) {
                return Err(FeedError::cancelled());
            }

            rows += 1;
            load.send(record.into_row())
                .await
                .map_err(|err| bulk_copy_error(spec.table, spec.columns, rows, err))?;

            batch += 1;
            if batch == COUNTER_BATCH {
                counters.add_inserted(batch);
                batch = 0;
            }
        }

        load.finalize()
            .await
            .map_err(|err| bulk_copy_error(spec.table, spec.columns, rows, err))?;
    }

    if batch > 0 {
        counters.add_inserted(batch);
    }

    exec_batch(conn, "COMMIT TRAN").await?;
    Ok(rows)
}

/// Streams records into the temp table, then MERGEs into the target.
pub async fn bulk_upsert<R: SqlRow>(
    pool: &MssqlPool,
    spec: &UpsertSpec,
    mut rx: mpsc::Receiver<R>,
    counters: Arc<RunCounters>,
    shutdown: ShutdownRx,
) -> FeedResult<u64> {
    let mut conn = pool.acquire().await?;

    info!(writer = spec.target, "bulk upsert started");

    match upsert_inner(&mut conn, spec, &mut rx, &counters, &shutdown).await {
        Ok(rows) => {
            info!(writer = spec.target, rows, "bulk upsert completed");
            Ok(rows)
        }
        Err(err) => {
            error!(writer = spec.target, error = %err, "bulk upsert failed");
            conn.discard();
            Err(err)
        }
    }
}

async fn upsert_inner<R: SqlRow>(
    conn: &mut PooledClient,
    spec: &UpsertSpec,
    rx: &mut mpsc::Receiver<R>,
    counters: &RunCounters,
    shutdown: &ShutdownRx,
) -> FeedResult<u64> {
    exec_batch(conn, "BEGIN TRAN").await?;
    // Server-side errors surface as a rollback rather than partial progress.
    exec_batch(conn, "SET XACT_ABORT ON;").await?;
    exec_batch(conn, spec.temp_ddl).await?;

    let mut rows = 0u64;
    let mut batch = 0i64;
    {
        let mut load = conn
            .client_mut()
            .bulk_insert_with_options(
                spec.temp_table,
                spec.columns,
                SqlBulkCopyOptions::default(),
                &[],
            )
            .await
            .map_err(|err| bulk_copy_error(spec.temp_table, spec.columns, 0, err))?;

        while let Some(record) = rx.recv().await {
            if is_shutdown(shutdown) {
                return Err(FeedError::cancelled());
            }

            rows += 1;
            load.send(record.into_row())
                .await
                .map_err(|err| bulk_copy_error(spec.temp_table, spec.columns, rows, err))?;

            batch += 1;
            if batch == COUNTER_BATCH {
                counters.add_inserted(batch);
                batch = 0;
            }
        }

        load.finalize()
            .await
            .map_err(|err| bulk_copy_error(spec.temp_table, spec.columns, rows, err))?;
    }

    if batch > 0 {
        counters.add_inserted(batch);
    }

    let merge_sql = sql::build_merge(spec);
    conn.client_mut()
        .simple_query(merge_sql.as_str())
        .await
        .map_err(|err| {
            FeedError::with_source(
                ErrorKind::MergeFailed {
                    table: spec.target.to_string(),
                },
                err,
            )
        })?
        .into_results()
        .await
        .map_err(|err| {
            FeedError::with_source(
                ErrorKind::MergeFailed {
                    table: spec.target.to_string(),
                },
                err,
            )
        })?;

    exec_batch(conn, &format!("DROP TABLE {}", spec.temp_table)).await?;
    exec_batch(conn, "COMMIT TRAN").await?;
    Ok(rows)
}

async fn exec_batch(conn: &mut PooledClient, sql: &str) -> FeedResult<()> {
    let operation = sql.split_whitespace().take(3).collect::<Vec<_>>().join(" ");
    let stream = conn
        .client_mut()
        .simple_query(sql)
        .await
        .map_err(|err| FeedError::query(operation.clone(), err))?;
    stream
        .into_results()
        .await
        .map_err(|err| FeedError::query(operation, err))?;
    Ok(())
}

fn bulk_copy_error(
    table: &str,
    columns: &[&str],
    row: u64,
    err: tiberius::error::Error,
) -> FeedError {
    FeedError::with_source(
        ErrorKind::BulkCopyFailed {
            table: table.to_string(),
            row,
            columns: columns.join(", "),
        },
        err,
    )
}

// Column value constructors shared by the row projections in
// [`tables`]. Owned values keep the rows `'static` for the bulk stream.

pub(crate) fn text(v: String) -> ColumnData<'static> {
    ColumnData::String(Some(v.into()))
}

pub(crate) fn int(v: i32) -> ColumnData<'static> {
    ColumnData::I32(Some(v))
}

pub(crate) fn bigint(v: i64) -> ColumnData<'static> {
    ColumnData::I64(Some(v))
}

pub(crate) fn float(v: f64) -> ColumnData<'static> {
    ColumnData::F64(Some(v))
}

pub(crate) fn date(v: NaiveDate) -> ColumnData<'static> {
    v.into_sql()
}

pub(crate) fn datetime(v: NaiveDateTime) -> ColumnData<'static> {
    v.into_sql()
}
