//! Per-table writer specifications and row projections.
//!
//! Column lists, join predicates, update SET clauses, temp-table DDL and
//! partition columns are immutable per table. The [`SqlRow`](super::SqlRow)
//! impl next to each spec keeps the value order reviewable against the
//! column list.

mod deal;
mod master;
mod region;

pub use deal::*;
pub use master::*;
pub use region::*;
