//! Storage contracts for the domain layer.
//!
//! The [`MappingStore`] trait abstracts the key-value store holding short code
//! mappings and click counters. Implementations live in
//! `crate::infrastructure::store`; a `mockall` mock is generated for unit tests.

pub mod mapping_store;

pub use mapping_store::{MappingStore, PutOutcome, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
