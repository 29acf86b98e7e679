//! Infrastructure layer: dataset loading, the read-only record store and the
//! create-command dispatcher.

pub mod command_dispatcher;
pub mod dataset;
pub mod read_model;


pub use command_dispatcher::{CommandDispatcher, CommandReceipt, CreateCommand, DispatchError};
pub use dataset::{Dataset, StoreError};
pub use read_model::{InMemoryRecordStore, RecordStore};
