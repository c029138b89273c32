//! Typed staging records, one flat shape per block code.
//!
//! Every record carries the `core_filename` / `core_process_date` envelope
//! appended by its decoder. Append-table records additionally carry the
//! run's process id and the source line number so downstream SQL can order
//! rows stably within a file.

pub mod deal;
pub mod master;
pub mod region;

pub use deal::*;
pub use master::*;
pub use region::*;
