//! `manet-output` — mobility-trace writers for the rust_manet simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                              |
//! |-----------|-------------|--------------------------------------------|
//! | *(none)*  | CSV         | `mobility_trace.csv`, `run_summary.csv`    |
//! | `sqlite`  | SQLite      | `output.db`                                |
//! | `parquet` | Parquet     | `mobility_trace.parquet`, `run_summary.parquet` |
//!
//! All backends implement [`TraceWriter`] and are driven by
//! [`TraceObserver`], which implements `manet_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use manet_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{RunSummaryRow, TraceRow};
pub use writer::TraceWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
