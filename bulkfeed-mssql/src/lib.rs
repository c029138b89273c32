//! SQL Server connection plumbing.
//!
//! Wraps tiberius with a small bounded pool. Writers hold one connection for
//! the full duration of their transaction, so the pool is sized from the
//! worker count (`max open = workers + 2`, `max idle = workers`) and recycles
//! idle connections up to a configured lifetime.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bulkfeed_config::DatabaseConfig;
use thiserror::Error;
use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::debug;

/// A connected tiberius client over a tokio TCP stream.
pub type MssqlClient = Client<Compat<TcpStream>>;

/// Errors raised by the connection layer.
#[derive(Debug, Error)]
pub enum MssqlError {
    #[error("sql server i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sql server protocol error: {0}")]
    Protocol(#[from] tiberius::error::Error),

    #[error("connection pool is closed")]
    PoolClosed,
}

struct IdleConn {
    client: MssqlClient,
    created_at: Instant,
}

struct PoolInner {
    config: Config,
    idle: Mutex<VecDeque<IdleConn>>,
    permits: Arc<Semaphore>,
    max_idle: usize,
    max_lifetime: Duration,
}

/// Bounded SQL Server connection pool.
#[derive(Clone)]
pub struct MssqlPool {
    inner: Arc<PoolInner>,
}

impl MssqlPool {
    /// Builds a pool without dialing.
    ///
    /// `max_open` bounds concurrently checked-out connections; `max_idle`
    /// bounds the recycle queue; `max_lifetime` discards idle connections
    /// older than the given duration.
    pub fn new(
        db: &DatabaseConfig,
        max_open: usize,
        max_idle: usize,
        max_lifetime: Duration,
    ) -> Self {
        let mut config = Config::new();
        config.host(&db.host);
        config.port(db.port);
        config.database(&db.database);
        config.authentication(AuthMethod::sql_server(&db.user, &db.password));
        config.trust_cert();

        MssqlPool {
            inner: Arc::new(PoolInner {
                config,
                idle: Mutex::new(VecDeque::new()),
                permits: Arc::new(Semaphore::new(max_open.max(1))),
                max_idle,
                max_lifetime,
            }),
        }
    }

    /// Builds a pool and verifies connectivity with a ping.
    pub async fn connect(
        db: &DatabaseConfig,
        max_open: usize,
        max_idle: usize,
        max_lifetime: Duration,
    ) -> Result<Self, MssqlError> {
        let pool = Self::new(db, max_open, max_idle, max_lifetime);

        // Fail fast on bad credentials or an unreachable host.
        let mut conn = pool.acquire().await?;
        conn.ping().await?;

        Ok(pool)
    }

    /// Checks out a connection, reusing an idle one when available.
    pub async fn acquire(&self) -> Result<PooledClient, MssqlError> {
        let permit = self
            .inner
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| MssqlError::PoolClosed)?;

        loop {
            let candidate = self.inner.idle.lock().unwrap().pop_front();
            match candidate {
                Some(idle) if idle.created_at.elapsed() < self.inner.max_lifetime => {
                    return Ok(PooledClient {
                        client: Some(idle.client),
                        created_at: idle.created_at,
                        pool: Arc::clone(&self.inner),
                        _permit: permit,
                    });
                }
                Some(_expired) => continue,
                None => break,
            }
        }

        let client = self.dial().await?;
        Ok(PooledClient {
            client: Some(client),
            created_at: Instant::now(),
            pool: Arc::clone(&self.inner),
            _permit: permit,
        })
    }

    async fn dial(&self) -> Result<MssqlClient, MssqlError> {
        let tcp = TcpStream::connect(self.inner.config.get_addr()).await?;
        tcp.set_nodelay(true)?;
        let client = Client::connect(self.inner.config.clone(), tcp.compat_write()).await?;
        debug!("opened sql server connection");
        Ok(client)
    }
}

/// Checked-out connection. Returned to the idle queue on drop unless it was
/// poisoned with [`PooledClient::discard`].
pub struct PooledClient {
    client: Option<MssqlClient>,
    created_at: Instant,
    pool: Arc<PoolInner>,
    _permit: OwnedSemaphorePermit,
}

impl PooledClient {
    /// Round-trips `SELECT 1`.
    pub async fn ping(&mut self) -> Result<(), MssqlError> {
        let stream = self.client_mut().simple_query("SELECT 1").await?;
        stream.into_results().await?;
        Ok(())
    }

    /// The underlying tiberius client.
    pub fn client_mut(&mut self) -> &mut MssqlClient {
        self.client
            .as_mut()
            .expect("client already taken from pooled connection")
    }

    /// Drops the connection instead of recycling it. Used after a failed
    /// transaction where session state (open temp tables, aborted batch)
    /// cannot be trusted.
    pub fn discard(mut self) {
        self.client = None;
    }
}

impl Drop for PooledClient {
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            let mut idle = self.pool.idle.lock().unwrap();
            if idle.len() < self.pool.max_idle
                && self.created_at.elapsed() < self.pool.max_lifetime
            {
                idle.push_back(IdleConn {
                    client,
                    created_at: self.created_at,
                });
            }
        }
    }
}
