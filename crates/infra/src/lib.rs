//! Infrastructure layer: dataset sources and the order repository.

pub mod order_store;

pub use order_store::{
    CsvFileSource, InMemorySource, OrderRecord, OrderRepository, OrderStoreError, RecordSource,
};
