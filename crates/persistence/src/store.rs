//! Thin file adapters around the codec.
//!
//! These only move document text between disk and the codec. Which path to
//! use and when to save remain the caller's decisions.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use stockroom_core::InventoryError;
use stockroom_inventory::Collection;

use crate::codec;

/// Persistence-layer error: IO layered over the domain taxonomy.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] InventoryError),
}

/// Reads a collection from a JSON document stored in a file.
#[derive(Debug, Clone)]
pub struct JsonReader {
    source: PathBuf,
}

impl JsonReader {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read and decode the source file. A missing or unreadable file
    /// surfaces as `StoreError::Io`; an invalid document as
    /// `StoreError::Domain(MalformedDocument)`.
    pub fn read(&self) -> Result<Collection, StoreError> {
        let document = fs::read_to_string(&self.source)?;
        let collection = codec::decode(&document)?;
        debug!(
            source = %self.source.display(),
            name = collection.name(),
            items = collection.len(),
            "loaded collection"
        );
        Ok(collection)
    }
}

/// Writes the JSON representation of a collection to a file.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    destination: PathBuf,
}

impl JsonWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Encode and write atomically: the document lands in a temp file in
    /// the destination directory first, then replaces the destination, so
    /// a crash mid-write never leaves a truncated document behind.
    pub fn write(&self, collection: &Collection) -> Result<(), StoreError> {
        let document = codec::encode(collection)?;

        let dir = self.destination.parent().filter(|p| !p.as_os_str().is_empty());
        let tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        fs::write(tmp.path(), &document)?;
        tmp.persist(&self.destination).map_err(|err| err.error)?;

        debug!(
            destination = %self.destination.display(),
            name = collection.name(),
            items = collection.len(),
            "saved collection"
        );
        Ok(())
    }
}
