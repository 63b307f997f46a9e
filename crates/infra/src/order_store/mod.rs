//! CSV-backed order store.
//!
//! Each order is one dataset line: `id,name1,price1,name2,price2,...`, no
//! header row. The store materializes `Order` entities from that flat file;
//! it never writes back, so in-memory mutation of an order stays in memory.

mod record;
mod repository;
mod source;

pub use record::OrderRecord;
pub use repository::OrderRepository;
pub use source::{CsvFileSource, InMemorySource, RecordSource};

use thiserror::Error;

/// Order store operation error.
///
/// These are **infrastructure errors** (IO, malformed dataset, missing
/// record) as opposed to domain errors. A malformed line aborts the whole
/// call; there is no partial recovery.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// Reading from the record source failed.
    #[error("order dataset read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset line did not parse as an order record.
    #[error("malformed order record at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// No record carries the requested id token.
    #[error("no order with id {0:?}")]
    NotFound(String),
}
