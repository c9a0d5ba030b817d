//! Persistence for inventory collections.
//!
//! The codec converts a collection to and from its JSON document; the store
//! holds the thin file adapters that move that document to and from disk.
//! Path construction and the decision of *when* to persist stay with the
//! caller.

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::{JsonReader, JsonWriter, StoreError};
