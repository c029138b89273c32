//! The idempotent finalize-lock protocol.
//!
//! Promotion of staged rows into business tables happens in an external
//! stored procedure, guarded by a persistent RUNNING/DONE/FAILED log keyed
//! on `(process_id, block_code)`. Acquire runs in a serializable
//! transaction; release runs outside it so a failed body still gets its
//! FAILED row.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use bulkfeed_mssql::PooledClient;

use crate::error::{ErrorKind, FeedError, FeedResult};
use crate::pipeline::StepContext;

const STATUS_RUNNING: &str = "RUNNING";
const STATUS_DONE: &str = "DONE";
const STATUS_FAILED: &str = "FAILED";

/// SDEAL's finalize procedure drains ten staging tables; bound it.
const SDEAL_FINALIZE_DEADLINE: Duration = Duration::from_secs(10 * 60);

pub async fn finalize_price_list(ctx: StepContext) -> FeedResult<()> {
    run_finalize(&ctx, "MPRICE", "dbo.SP_MPRICE_FINALIZE", None).await
}

pub async fn finalize_customer_price(ctx: StepContext) -> FeedResult<()> {
    run_finalize(&ctx, "MKPLPRICE", "dbo.SP_MKPLPRICE_FINALIZE", None).await
}

pub async fn finalize_sales_deal(ctx: StepContext) -> FeedResult<()> {
    run_finalize(
        &ctx,
        "SDEAL",
        "dbo.SP_SDEAL_FROM_DUMMY",
        Some(SDEAL_FINALIZE_DEADLINE),
    )
    .await
}

/// Empties the sales-deal staging tables ahead of a fresh import.
pub async fn truncate_sales_deal(ctx: StepContext) -> FeedResult<()> {
    let mut conn = ctx.pool.acquire().await?;

    let result = async {
        exec(&mut conn, "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE;").await?;
        exec(&mut conn, "BEGIN TRAN").await?;
        exec(
            &mut conn,
            "TRUNCATE TABLE dbo.DP_FG_CHECK;\n\
             TRUNCATE TABLE dbo.DP_ZDHDR;\n\
             TRUNCATE TABLE dbo.DP_ZDITM;\n\
             TRUNCATE TABLE dbo.DP_ZDDET;\n\
             TRUNCATE TABLE dbo.DP_ZPMIX;\n\
             TRUNCATE TABLE dbo.DP_ZSCREG;\n\
             TRUNCATE TABLE dbo.DP_ZSCMIX;\n\
             TRUNCATE TABLE dbo.FG_ZDHDR;\n\
             TRUNCATE TABLE dbo.FG_ZFRDET;\n\
             TRUNCATE TABLE dbo.FG_ZFRMIX;",
        )
        .await?;
        exec(&mut conn, "COMMIT TRAN").await
    }
    .await;

    if let Err(err) = result {
        conn.discard();
        return Err(err);
    }
    Ok(())
}

/// What acquire should do with the current log row.
#[derive(Debug, PartialEq, Eq)]
enum AcquireDecision {
    /// A DONE row exists: the finalize already happened, succeed silently.
    SkipDone,
    /// A live RUNNING row exists: refuse without mutating it.
    RejectRunning,
    /// Missing, FAILED, or stale RUNNING: take the lock.
    Acquire,
}

fn decide_acquire(
    status: Option<&str>,
    started_at: Option<NaiveDateTime>,
    now: NaiveDateTime,
    stale_minutes: i64,
) -> AcquireDecision {
    match status {
        None => AcquireDecision::Acquire,
        Some(STATUS_DONE) => AcquireDecision::SkipDone,
        Some(STATUS_RUNNING) => {
            // A crash between acquire and release leaves RUNNING behind;
            // rows older than the stale threshold are recoverable.
            let stale = started_at
                .map(|t| now - t >= chrono::Duration::minutes(stale_minutes))
                .unwrap_or(false);
            if stale {
                AcquireDecision::Acquire
            } else {
                AcquireDecision::RejectRunning
            }
        }
        Some(_) => AcquireDecision::Acquire,
    }
}

/// Runs the acquire / body / release sequence for one block.
pub async fn run_finalize(
    ctx: &StepContext,
    block: &'static str,
    procedure: &'static str,
    deadline: Option<Duration>,
) -> FeedResult<()> {
    match acquire(ctx, block).await? {
        AcquireDecision::SkipDone => {
            info!(block, "finalize already DONE, skipping");
            return Ok(());
        }
        AcquireDecision::RejectRunning => {
            return Err(FeedError::new(ErrorKind::FinalizeAlreadyRunning {
                block: block.to_string(),
            }));
        }
        AcquireDecision::Acquire => {}
    }

    let outcome = execute_procedure(ctx, block, procedure, deadline).await;

    match outcome {
        Ok(()) => {
            release(ctx, block, STATUS_DONE, None).await?;
            info!(block, "finalize DONE");
            Ok(())
        }
        Err(err) => {
            release(ctx, block, STATUS_FAILED, Some(err.to_string())).await?;
            Err(err)
        }
    }
}

/// Serializable acquire transaction: inspect the current status, then MERGE
/// the row to RUNNING when the lock is takeable. The row is not mutated on
/// SkipDone / RejectRunning.
async fn acquire(ctx: &StepContext, block: &str) -> FeedResult<AcquireDecision> {
    let mut conn = ctx.pool.acquire().await?;

    let result = async {
        exec(&mut conn, "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE;").await?;
        exec(&mut conn, "BEGIN TRAN").await?;

        let row = conn
            .client_mut()
            .query(
                "SELECT status, started_at FROM import_finalize_log \
                 WHERE process_id = @P1 AND block_code = @P2",
                &[&ctx.process_id.as_str(), &block],
            )
            .await
            .map_err(|err| FeedError::query("select finalize status", err))?
            .into_row()
            .await
            .map_err(|err| FeedError::query("select finalize status", err))?;

        let (status, started_at) = match &row {
            Some(row) => (
                row.try_get::<&str, _>(0)
                    .map_err(|err| FeedError::query("read finalize status", err))?
                    .map(str::to_string),
                row.try_get::<NaiveDateTime, _>(1)
                    .map_err(|err| FeedError::query("read finalize started_at", err))?,
            ),
            None => (None, None),
        };

        let decision = decide_acquire(
            status.as_deref(),
            started_at,
            Local::now().naive_local(),
            ctx.config.finalize_stale_minutes,
        );

        if decision == AcquireDecision::Acquire {
            conn.client_mut()
                .execute(
                    "MERGE import_finalize_log AS t \
                     USING (SELECT @P1 AS pid, @P2 AS blk) s \
                     ON t.process_id = s.pid AND t.block_code = s.blk \
                     WHEN MATCHED THEN \
                         UPDATE SET status='RUNNING', \
                             started_at=SYSDATETIME(), \
                             finished_at=NULL, \
                             error_message=NULL \
                     WHEN NOT MATCHED THEN \
                         INSERT (process_id, block_code, status, started_at) \
                         VALUES (@P1, @P2, 'RUNNING', SYSDATETIME());",
                    &[&ctx.process_id.as_str(), &block],
                )
                .await
                .map_err(|err| FeedError::query("acquire finalize lock", err))?;
        }

        exec(&mut conn, "COMMIT TRAN").await?;
        Ok(decision)
    }
    .await;

    match result {
        Ok(decision) => Ok(decision),
        Err(err) => {
            conn.discard();
            Err(err)
        }
    }
}

/// Invokes the block's finalize procedure and interprets its
/// `ERROR_NUMBER / ERROR_STATE / ERROR_LINE / ERROR_MESSAGE` result row.
async fn execute_procedure(
    ctx: &StepContext,
    block: &'static str,
    procedure: &'static str,
    deadline: Option<Duration>,
) -> FeedResult<()> {
    let started = std::time::Instant::now();
    info!(block, procedure, "finalize started");

    let mut conn = ctx.pool.acquire().await?;

    let body = procedure_body(&mut conn, &ctx.process_id, procedure);
    let result = match deadline {
        Some(limit) => match tokio::time::timeout(limit, body).await {
            Ok(result) => result,
            Err(_) => Err(FeedError::new(ErrorKind::Timeout {
                operation: procedure.to_string(),
            })),
        },
        None => body.await,
    };

    match result {
        Ok(()) => {
            info!(block, elapsed = ?started.elapsed(), "finalize procedure completed");
            Ok(())
        }
        Err(err) => {
            // The connection may hold an open or aborted transaction.
            conn.discard();
            Err(err)
        }
    }
}

async fn procedure_body(
    conn: &mut PooledClient,
    process_id: &str,
    procedure: &'static str,
) -> FeedResult<()> {
    exec(conn, "BEGIN TRAN").await?;

    let sql = format!("EXEC {procedure} @PROCESS_ID = @P1");
    let row = conn
        .client_mut()
        .query(sql.as_str(), &[&process_id])
        .await
        .map_err(|err| FeedError::query(procedure, err))?
        .into_row()
        .await
        .map_err(|err| FeedError::query(procedure, err))?;

    if let Some(row) = row {
        let number = row.try_get::<i32, _>(0).ok().flatten().unwrap_or(0) as i64;
        let state = row.try_get::<i32, _>(1).ok().flatten().unwrap_or(0) as i64;
        let line = row.try_get::<i32, _>(2).ok().flatten().unwrap_or(0) as i64;
        let message = row
            .try_get::<&str, _>(3)
            .ok()
            .flatten()
            .unwrap_or_default()
            .to_string();

        if number != 0 {
            return Err(FeedError::new(ErrorKind::FinalizeProcedureFailed {
                procedure: procedure.to_string(),
                number,
                state,
                line,
                message,
            }));
        }
    }

    exec(conn, "COMMIT TRAN").await
}

/// Advances the log row outside the acquire transaction.
async fn release(
    ctx: &StepContext,
    block: &str,
    status: &str,
    error_message: Option<String>,
) -> FeedResult<()> {
    let mut conn = ctx.pool.acquire().await?;

    match &error_message {
        Some(message) => conn
            .client_mut()
            .execute(
                "UPDATE import_finalize_log \
                 SET status=@P3, finished_at=SYSDATETIME(), error_message=@P4 \
                 WHERE process_id=@P1 AND block_code=@P2",
                &[
                    &ctx.process_id.as_str(),
                    &block,
                    &status,
                    &message.as_str(),
                ],
            )
            .await
            .map_err(|err| FeedError::query("release finalize lock", err))?,
        None => conn
            .client_mut()
            .execute(
                "UPDATE import_finalize_log \
                 SET status=@P3, finished_at=SYSDATETIME() \
                 WHERE process_id=@P1 AND block_code=@P2",
                &[&ctx.process_id.as_str(), &block, &status],
            )
            .await
            .map_err(|err| FeedError::query("release finalize lock", err))?,
    };

    Ok(())
}

async fn exec(conn: &mut PooledClient, sql: &str) -> FeedResult<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn missing_row_acquires() {
        assert_eq!(
            decide_acquire(None, None, at(10, 0), 30),
            AcquireDecision::Acquire
        );
    }

    #[test]
    fn done_row_skips_without_mutation() {
        assert_eq!(
            decide_acquire(Some("DONE"), Some(at(9, 0)), at(10, 0), 30),
            AcquireDecision::SkipDone
        );
    }

    #[test]
    fn live_running_row_rejects() {
        assert_eq!(
            decide_acquire(Some("RUNNING"), Some(at(9, 50)), at(10, 0), 30),
            AcquireDecision::RejectRunning
        );
    }

    #[test]
    fn stale_running_row_is_recoverable() {
        assert_eq!(
            decide_acquire(Some("RUNNING"), Some(at(9, 0)), at(10, 0), 30),
            AcquireDecision::Acquire
        );
    }

    #[test]
    fn running_without_timestamp_rejects() {
        assert_eq!(
            decide_acquire(Some("RUNNING"), None, at(10, 0), 30),
            AcquireDecision::RejectRunning
        );
    }

    #[test]
    fn failed_row_reacquires() {
        assert_eq!(
            decide_acquire(Some("FAILED"), Some(at(9, 0)), at(10, 0), 30),
            AcquireDecision::Acquire
        );
    }
}
