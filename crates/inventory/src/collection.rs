use stockroom_core::{InventoryError, InventoryResult, RecordId};

use crate::observer::{ChangeEvent, ChangeObserver};
use crate::record::Record;

/// A named, ordered set of records with exclusive ownership.
///
/// Invariants:
/// - all record ids are pairwise distinct
/// - `items` reflects insertion order (append-only; removal does not
///   reorder survivors)
pub struct Collection {
    name: String,
    items: Vec<Record>,
    observer: Option<Box<dyn ChangeObserver>>,
}

impl Collection {
    /// Create an empty collection. The name identifies the persisted
    /// document and is immutable thereafter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            observer: None,
        }
    }

    /// Attach a mutation observer. Replaces any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn ChangeObserver>) {
        self.observer = Some(observer);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.items.iter()
    }

    /// Validate and append a new record, assigning the next free id.
    ///
    /// Fails with `IllegalQuantity` when `quantity < 0`; the collection is
    /// untouched on failure. Returns the assigned id (also observable via
    /// `last_id`).
    pub fn add(
        &mut self,
        title: impl Into<String>,
        quantity: i64,
        description: impl Into<String>,
    ) -> InventoryResult<RecordId> {
        if quantity < 0 {
            return Err(InventoryError::illegal_quantity(quantity));
        }
        let id = self.next_id();
        self.items.push(Record::new(id, title, quantity, description));
        self.notify(ChangeEvent::ItemAdded { id });
        Ok(id)
    }

    /// Append an already-constructed record verbatim.
    ///
    /// Deserialization-only path: no id or quantity validation is performed,
    /// on the assumption that the source document was produced by a prior
    /// save. Feeding it hand-edited records can break the collection's
    /// uniqueness and non-negativity invariants.
    pub fn add_from_persisted(&mut self, record: Record) {
        let id = record.id();
        self.items.push(record);
        self.notify(ChangeEvent::ItemRestored { id });
    }

    /// Remove the record with the given id. Absence is tolerated silently;
    /// the return value reports whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                self.notify(ChangeEvent::ItemRemoved { id });
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, id: RecordId) -> bool {
        self.items.iter().any(|record| record.id() == id)
    }

    /// Look up a record by id. Absence is not an error.
    pub fn get_by_id(&self, id: RecordId) -> Option<&Record> {
        self.items.iter().find(|record| record.id() == id)
    }

    /// Mutable lookup. Quantity changes and trusted edits go through the
    /// record returned here.
    pub fn get_by_id_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.items.iter_mut().find(|record| record.id() == id)
    }

    /// Zero-based position of the record with the given id.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|record| record.id() == id)
    }

    /// Case-insensitive substring match against every title, preserving
    /// insertion order. An empty result is normal, not an error.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Record> {
        let needle = needle.to_lowercase();
        self.items
            .iter()
            .filter(|record| record.title().to_lowercase().contains(&needle))
            .collect()
    }

    /// Id of the most recently appended record, `None` when empty.
    pub fn last_id(&self) -> Option<RecordId> {
        self.items.last().map(Record::id)
    }

    /// Next free id: one past the maximum id currently present, or 1 for an
    /// empty collection. Recomputed by a full scan on every add, so ids of
    /// removed records are never reused and gaps are never backfilled.
    fn next_id(&self) -> RecordId {
        self.items
            .iter()
            .map(Record::id)
            .max()
            .map_or(RecordId::new(1), RecordId::next)
    }

    fn notify(&mut self, event: ChangeEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change(&event);
        }
    }
}

impl core::fmt::Debug for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("items", &self.items)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
