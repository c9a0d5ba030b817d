//! Inventory domain module.
//!
//! This crate contains the business rules for inventory records and the
//! collection that owns them, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod collection;
pub mod observer;
pub mod record;

pub use collection::Collection;
pub use observer::{ChangeEvent, ChangeObserver};
pub use record::Record;
