//! Streaming import pipeline for pipe-delimited block feeds.
//!
//! A run is parameterized by a block code that selects one logical feed.
//! Files are parsed by a worker fleet into typed row channels, drained by
//! bulk writers into SQL Server (raw append or temp-table MERGE upsert),
//! and promoted by an idempotent finalize step guarded by a persistent
//! RUNNING/DONE/FAILED log.

pub mod concurrency;
pub mod decode;
pub mod error;
pub mod finalize;
pub mod metrics;
pub mod parse;
pub mod pipeline;
pub mod records;
pub mod writer;

pub use error::{ErrorKind, FeedError, FeedResult};
