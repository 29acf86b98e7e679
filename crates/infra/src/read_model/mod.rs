//! Read-only record store the views query.

pub mod record_store;

pub use record_store::{InMemoryRecordStore, RecordStore};
