//! Orders domain module.
//!
//! This crate contains the business rules for grocery orders, implemented
//! purely as deterministic in-memory logic (no IO, no HTTP, no storage).

pub mod order;

pub use order::{Order, TAX_RATE};
