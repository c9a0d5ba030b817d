use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, RecordId};

/// A single inventory entry.
///
/// Field declaration order is the wire order of the persisted document
/// (`id`, `title`, `quantity`, `description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    title: String,
    quantity: i64,
    description: String,
}

impl Record {
    /// Construct a record. Quantity is not checked here; the collection's
    /// `add` path validates it, and the deserialization path trusts it.
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        quantity: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            quantity,
            description: description.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply a signed quantity change.
    ///
    /// A zero delta is a no-op. An increase always succeeds. A decrease that
    /// would cross below zero fails with `NegativeQuantity` and leaves the
    /// quantity unchanged.
    pub fn update_quantity(&mut self, delta: i64) -> InventoryResult<()> {
        if delta == 0 {
            return Ok(());
        }
        let updated = self.quantity + delta;
        if updated < 0 {
            return Err(InventoryError::negative_quantity(self.quantity, delta));
        }
        self.quantity = updated;
        Ok(())
    }

    // Trusted mutation API: unconditional setters for editing frontends.
    // The collection's own invariant-preserving paths never call these.

    pub fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
