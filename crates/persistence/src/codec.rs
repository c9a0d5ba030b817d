//! Lossless JSON codec for collections.
//!
//! The document layout is fixed:
//!
//! ```json
//! {
//!   "name": "...",
//!   "items": [
//!     { "id": 1, "title": "...", "quantity": 0, "description": "..." }
//!   ]
//! }
//! ```
//!
//! `items` preserves collection iteration order; per-item field order
//! follows the `Record` struct declaration.

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult};
use stockroom_inventory::{Collection, Record};

/// Wire form of a collection. Deserialization rejects a missing or
/// mistyped field; it does not re-validate id uniqueness or quantity sign
/// (a previously-saved document is trusted as-is).
#[derive(Debug, Serialize, Deserialize)]
struct CollectionDocument {
    name: String,
    items: Vec<Record>,
}

/// Render a collection as its JSON document. Deterministic: encoding the
/// same collection twice yields byte-identical output.
pub fn encode(collection: &Collection) -> InventoryResult<String> {
    let document = CollectionDocument {
        name: collection.name().to_owned(),
        items: collection.records().to_vec(),
    };
    serde_json::to_string_pretty(&document).map_err(|err| InventoryError::malformed(err.to_string()))
}

/// Rebuild a collection from its JSON document.
///
/// Fails with `MalformedDocument` when the text is not JSON, a top-level
/// field is absent, or any item field is absent or mistyped; no partial
/// collection is ever returned. Items are appended through the trusted
/// `add_from_persisted` path, in document order.
pub fn decode(document: &str) -> InventoryResult<Collection> {
    let document: CollectionDocument = serde_json::from_str(document)
        .map_err(|err| InventoryError::malformed(err.to_string()))?;

    let mut collection = Collection::new(document.name);
    for record in document.items {
        collection.add_from_persisted(record);
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::RecordId;

    fn seeded() -> Collection {
        let mut collection = Collection::new("warehouse");
        collection.add("Widget A", 10, "first widget").unwrap();
        collection.add("Widget B", 20, "second widget").unwrap();
        collection.remove(RecordId::new(1));
        collection.add("Zubat", 0, "").unwrap();
        collection
    }

    fn assert_same(left: &Collection, right: &Collection) {
        assert_eq!(left.name(), right.name());
        assert_eq!(left.records(), right.records());
    }

    #[test]
    fn round_trip_preserves_everything() {
        let original = seeded();
        let decoded = decode(&encode(&original).unwrap()).unwrap();
        assert_same(&original, &decoded);
    }

    #[test]
    fn round_trip_of_empty_collection() {
        let original = Collection::new("empty");
        let decoded = decode(&encode(&original).unwrap()).unwrap();
        assert_eq!(decoded.name(), "empty");
        assert!(decoded.is_empty());
    }

    #[test]
    fn encode_is_deterministic() {
        let collection = seeded();
        assert_eq!(encode(&collection).unwrap(), encode(&collection).unwrap());
    }

    #[test]
    fn encoded_item_fields_are_in_wire_order() {
        let mut collection = Collection::new("warehouse");
        collection.add("Widget", 10, "a widget").unwrap();
        let document = encode(&collection).unwrap();

        let id = document.find("\"id\"").unwrap();
        let title = document.find("\"title\"").unwrap();
        let quantity = document.find("\"quantity\"").unwrap();
        let description = document.find("\"description\"").unwrap();
        assert!(id < title && title < quantity && quantity < description);
    }

    #[test]
    fn decode_rejects_non_json_text() {
        let err = decode("not a document").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument(_)));
    }

    #[test]
    fn decode_rejects_missing_name() {
        let err = decode(r#"{ "items": [] }"#).unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument(_)));
    }

    #[test]
    fn decode_rejects_missing_items() {
        let err = decode(r#"{ "name": "warehouse" }"#).unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument(_)));
    }

    #[test]
    fn decode_rejects_item_with_missing_field() {
        let err = decode(
            r#"{ "name": "warehouse", "items": [
                { "id": 1, "title": "Widget", "quantity": 10 }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument(_)));
    }

    #[test]
    fn decode_rejects_item_with_mistyped_field() {
        let err = decode(
            r#"{ "name": "warehouse", "items": [
                { "id": 1, "title": "Widget", "quantity": "ten", "description": "" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument(_)));
    }

    #[test]
    fn decode_trusts_duplicate_ids_and_negative_quantities() {
        // Trust-the-source policy: structural validity only.
        let collection = decode(
            r#"{ "name": "hand-edited", "items": [
                { "id": 1, "title": "A", "quantity": -5, "description": "" },
                { "id": 1, "title": "B", "quantity": 2, "description": "" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.get_by_id(RecordId::new(1)).unwrap().quantity(),
            -5
        );
    }

    #[test]
    fn decode_preserves_document_order() {
        let collection = decode(
            r#"{ "name": "warehouse", "items": [
                { "id": 3, "title": "C", "quantity": 1, "description": "" },
                { "id": 1, "title": "A", "quantity": 1, "description": "" }
            ] }"#,
        )
        .unwrap();
        let ids: Vec<u64> = collection.iter().map(|r| r.id().as_u64()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(collection.last_id(), Some(RecordId::new(1)));
    }
}
