//! Mutation side channel.
//!
//! The collection notifies an injected observer after each successful
//! mutation. Callers that don't need an audit trail supply no observer;
//! observation is after-the-fact only and cannot veto a mutation.

use stockroom_core::RecordId;

/// A successful mutation of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A record was validated and appended through `add`.
    ItemAdded { id: RecordId },
    /// A record was removed through `remove`.
    ItemRemoved { id: RecordId },
    /// A record was appended verbatim through `add_from_persisted`.
    ItemRestored { id: RecordId },
}

impl ChangeEvent {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    pub fn event_type(&self) -> &'static str {
        match self {
            ChangeEvent::ItemAdded { .. } => "inventory.item.added",
            ChangeEvent::ItemRemoved { .. } => "inventory.item.removed",
            ChangeEvent::ItemRestored { .. } => "inventory.item.restored",
        }
    }

    pub fn id(&self) -> RecordId {
        match self {
            ChangeEvent::ItemAdded { id }
            | ChangeEvent::ItemRemoved { id }
            | ChangeEvent::ItemRestored { id } => *id,
        }
    }
}

/// Receives collection mutations after they have been applied.
pub trait ChangeObserver {
    fn on_change(&mut self, event: &ChangeEvent);
}

impl<F> ChangeObserver for F
where
    F: FnMut(&ChangeEvent),
{
    fn on_change(&mut self, event: &ChangeEvent) {
        self(event)
    }
}
