//! Step chain and block orchestration.

use std::sync::Arc;
use std::time::Instant;

use futures::future::BoxFuture;
use tracing::info;

use bulkfeed_config::Config;
use bulkfeed_mssql::MssqlPool;

use crate::concurrency::ShutdownRx;
use crate::error::FeedResult;
use crate::metrics::RunCounters;

pub mod blocks;
pub mod files;
pub mod import;
pub mod parser;

/// Shared state threaded through every step of a run.
#[derive(Clone)]
pub struct StepContext {
    pub config: Arc<Config>,
    pub pool: MssqlPool,
    pub counters: Arc<RunCounters>,
    pub process_id: String,
    pub shutdown: ShutdownRx,
}

type StepFn = Box<dyn FnOnce(StepContext) -> BoxFuture<'static, FeedResult<()>> + Send>;

struct Step {
    name: String,
    run: StepFn,
}

/// Ordered, sequential execution of named steps with per-step timing.
///
/// The first error halts the chain; work committed by earlier steps stays
/// committed.
#[derive(Default)]
pub struct StepChain {
    steps: Vec<Step>,
}

impl StepChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named step.
    pub fn add<F, Fut>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnOnce(StepContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = FeedResult<()>> + Send + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            run: Box::new(move |ctx| Box::pin(f(ctx))),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the steps in order, returning the first error.
    pub async fn run(self, ctx: StepContext) -> FeedResult<()> {
        for (i, step) in self.steps.into_iter().enumerate() {
            info!("=====================================================");
            info!("{}", step.name);
            info!("=====================================================");

            let started = Instant::now();
            (step.run)(ctx.clone()).await?;
            info!(step = i + 1, elapsed = ?started.elapsed(), "step completed");
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::concurrency::create_shutdown;
    use crate::error::{ErrorKind, FeedError};
    use bulkfeed_config::DatabaseConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Context whose pool never dials; steps under test don't touch the
    /// database.
    pub(crate) fn offline_context() -> StepContext {
        std::env::set_var("FILE_PATH", "/tmp/bulkfeed-test-in");
        let config = Config::from_env().expect("test config");
        let db = DatabaseConfig {
            host: "localhost".into(),
            port: 1433,
            user: "sa".into(),
            password: String::new(),
            database: "master".into(),
        };
        let pool = MssqlPool::new(&db, 2, 1, Duration::from_secs(60));
        let (_tx, shutdown) = create_shutdown();
        StepContext {
            config: Arc::new(config),
            pool,
            counters: RunCounters::new(),
            process_id: "test-process".into(),
            shutdown,
        }
    }

    #[tokio::test]
    async fn steps_run_in_registration_order_and_halt_on_error() {
        let order = Arc::new(AtomicUsize::new(0));
        let mut chain = StepChain::new();

        let o1 = order.clone();
        chain.add("first", move |_ctx| async move {
            assert_eq!(o1.fetch_add(1, Ordering::SeqCst), 0);
            Ok(())
        });
        let o2 = order.clone();
        chain.add("second", move |_ctx| async move {
            o2.fetch_add(1, Ordering::SeqCst);
            Err(FeedError::configuration("boom"))
        });
        let o3 = order.clone();
        chain.add("third", move |_ctx| async move {
            o3.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let err = chain.run(offline_context()).await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ConfigurationError { .. }));
        // The third step never ran.
        assert_eq!(order.load(Ordering::SeqCst), 2);
    }
}
