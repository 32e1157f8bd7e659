//! Document types for the item exporter
//!
//! This module defines the transformed document shape that is serialized to
//! JSON and delivered to the remote endpoint, one document per CSV row.
//!
//! Two CSV schema variants feed the same outer document shape; they differ
//! only in the nested `meta` object, which is modeled as an untagged enum so
//! each variant serializes to a flat JSON object.

use serde::{Deserialize, Serialize};

/// A fully transformed item document, ready for upload
///
/// Built once per CSV row during loading and never mutated afterwards.
/// The full document sequence is shared read-only across all upload workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    /// Agent tag stamped into every document (default `dummy#1`)
    pub agent: String,

    /// The raw item id string, verbatim from the CSV row
    pub id: String,

    /// Numeric id derived by splicing the three-character prefix off `id`
    ///
    /// For example, an id of `ITM123` yields a mid of 123.
    pub mid: i64,

    /// Item payload entries (always exactly one per document)
    pub data: Vec<ItemEntry>,
}

/// One entry in a document's `data` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    /// Display name of the item
    pub item_name: String,

    /// Schema-dependent metadata
    pub meta: DocumentMeta,
}

/// Schema-dependent item metadata
///
/// Serialized untagged: each variant appears on the wire as a plain object
/// holding only its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentMeta {
    /// Metadata for the `item` schema (id, sid, item_name, thumbnail)
    Thumbnail {
        /// Thumbnail image URL, passed through unvalidated
        thumbnail: String,
    },

    /// Metadata for the `price` schema (id, sid, item_name, mall, delivery, price)
    ///
    /// All three fields are uninterpreted pass-through strings; the exporter
    /// never parses prices or delivery fees.
    Listing {
        /// Mall or storefront name
        mall: String,
        /// Delivery fee or delivery descriptor
        delivery: String,
        /// Listed price
        price: String,
    },
}

impl ItemDocument {
    /// Build a document from its parts, wrapping the single entry in the
    /// `data` array the wire format expects.
    pub fn new(agent: String, id: String, mid: i64, item_name: String, meta: DocumentMeta) -> Self {
        Self {
            agent,
            id,
            mid,
            data: vec![ItemEntry { item_name, meta }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_document_serializes_to_wire_shape() {
        let document = ItemDocument::new(
            "dummy#1".to_string(),
            "ITM123".to_string(),
            123,
            "Widget".to_string(),
            DocumentMeta::Thumbnail {
                thumbnail: "http://img/1.png".to_string(),
            },
        );

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!({
                "agent": "dummy#1",
                "id": "ITM123",
                "mid": 123,
                "data": [
                    {
                        "item_name": "Widget",
                        "meta": { "thumbnail": "http://img/1.png" }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_listing_meta_serializes_flat() {
        let meta = DocumentMeta::Listing {
            mall: "SuperMall".to_string(),
            delivery: "2500".to_string(),
            price: "19900".to_string(),
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({ "mall": "SuperMall", "delivery": "2500", "price": "19900" })
        );
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let document = ItemDocument::new(
            "dummy#1".to_string(),
            "PRC042".to_string(),
            42,
            "Gadget".to_string(),
            DocumentMeta::Listing {
                mall: "MallOne".to_string(),
                delivery: "0".to_string(),
                price: "990".to_string(),
            },
        );

        let encoded = serde_json::to_string(&document).unwrap();
        let decoded: ItemDocument = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, document);
    }
}
