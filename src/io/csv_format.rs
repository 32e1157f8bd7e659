//! CSV format handling for item rows
//!
//! This module centralizes the positional CSV format concerns, providing:
//! - Field layout constants for both schema variants
//! - Conversion from raw CSV records to transformed item documents
//!
//! The input files are headerless; fields are identified purely by position.
//! Rows may carry extra trailing fields (they are ignored), but a row with
//! fewer fields than its schema requires is an error.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{DocumentMeta, ItemDocument};
use csv::StringRecord;

/// Field positions for the `item` schema: id, sid, item_name, thumbnail
pub const ITEM_FIELD_COUNT: usize = 4;

/// Field positions for the `price` schema: id, sid, item_name, mall, delivery, price
pub const PRICE_FIELD_COUNT: usize = 6;

/// Length of the non-numeric prefix spliced off the item id to form `mid`
const MID_PREFIX_LEN: usize = 3;

/// Fetch a positional field from a record, erroring when the row is too short
fn field<'r>(record: &'r StringRecord, index: usize, name: &str, required: usize) -> Result<&'r str, String> {
    record.get(index).ok_or_else(|| {
        format!(
            "row has {} fields, expected at least {} (missing '{}')",
            record.len(),
            required,
            name
        )
    })
}

/// Derive the numeric `mid` from an item id by splicing off its prefix
///
/// An id of `ITM123` yields 123. Ids shorter than the prefix, ids whose
/// prefix ends inside a multi-byte character, and ids with a non-numeric
/// suffix are all errors.
pub fn parse_mid(id: &str) -> Result<i64, String> {
    let suffix = id
        .get(MID_PREFIX_LEN..)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("item id '{}' is too short for a numeric suffix", id))?;

    suffix
        .parse::<i64>()
        .map_err(|_| format!("item id '{}' has a non-numeric suffix '{}'", id, suffix))
}

/// Convert an `item`-schema record to a document
///
/// Positional layout: `id, sid, item_name, thumbnail`. The `sid` field is
/// read but not part of the document, matching the wire format.
///
/// # Returns
///
/// Result containing either:
/// - Ok(ItemDocument) - Successfully converted document
/// - Err(String) - Error message describing the conversion failure
pub fn convert_item_record(record: &StringRecord, agent: &str) -> Result<ItemDocument, String> {
    let id = field(record, 0, "id", ITEM_FIELD_COUNT)?;
    let _sid = field(record, 1, "sid", ITEM_FIELD_COUNT)?;
    let item_name = field(record, 2, "item_name", ITEM_FIELD_COUNT)?;
    let thumbnail = field(record, 3, "thumbnail", ITEM_FIELD_COUNT)?;

    let mid = parse_mid(id)?;

    Ok(ItemDocument::new(
        agent.to_string(),
        id.to_string(),
        mid,
        item_name.to_string(),
        DocumentMeta::Thumbnail {
            thumbnail: thumbnail.to_string(),
        },
    ))
}

/// Convert a `price`-schema record to a document
///
/// Positional layout: `id, sid, item_name, mall, delivery, price`. The
/// `mall`, `delivery` and `price` fields are pass-through strings; no
/// numeric parsing is applied to them.
pub fn convert_price_record(record: &StringRecord, agent: &str) -> Result<ItemDocument, String> {
    let id = field(record, 0, "id", PRICE_FIELD_COUNT)?;
    let _sid = field(record, 1, "sid", PRICE_FIELD_COUNT)?;
    let item_name = field(record, 2, "item_name", PRICE_FIELD_COUNT)?;
    let mall = field(record, 3, "mall", PRICE_FIELD_COUNT)?;
    let delivery = field(record, 4, "delivery", PRICE_FIELD_COUNT)?;
    let price = field(record, 5, "price", PRICE_FIELD_COUNT)?;

    let mid = parse_mid(id)?;

    Ok(ItemDocument::new(
        agent.to_string(),
        id.to_string(),
        mid,
        item_name.to_string(),
        DocumentMeta::Listing {
            mall: mall.to_string(),
            delivery: delivery.to_string(),
            price: price.to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_convert_item_record_golden() {
        let record = record(&["ITM123", "S1", "Widget", "http://img/1.png"]);
        let document = convert_item_record(&record, "dummy#1").unwrap();

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
    fn test_convert_price_record_golden() {
        let record = record(&["PRC9000", "S7", "Gadget", "SuperMall", "2500", "19900"]);
        let document = convert_price_record(&record, "dummy#1").unwrap();

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!({
                "agent": "dummy#1",
                "id": "PRC9000",
                "mid": 9000,
                "data": [
                    {
                        "item_name": "Gadget",
                        "meta": { "mall": "SuperMall", "delivery": "2500", "price": "19900" }
                    }
                ]
            })
        );
    }

    #[rstest]
    #[case::negative_suffix("ITM-42", -42)]
    #[case::zero_suffix("ABC0", 0)]
    #[case::long_suffix("XYZ9876543210", 9_876_543_210)]
    fn test_parse_mid_valid(#[case] id: &str, #[case] expected: i64) {
        assert_eq!(parse_mid(id), Ok(expected));
    }

    #[rstest]
    #[case::too_short("IT", "too short")]
    #[case::exactly_prefix("ITM", "too short")]
    #[case::non_numeric("ITMabc", "non-numeric suffix")]
    #[case::mixed_suffix("ITM12x", "non-numeric suffix")]
    fn test_parse_mid_errors(#[case] id: &str, #[case] expected_error: &str) {
        let error = parse_mid(id).unwrap_err();
        assert!(error.contains(expected_error), "unexpected error: {}", error);
    }

    #[rstest]
    #[case::empty(&[], "missing 'id'")]
    #[case::one_field(&["ITM1"], "missing 'sid'")]
    #[case::three_fields(&["ITM1", "S1", "Widget"], "missing 'thumbnail'")]
    fn test_convert_item_record_short_rows(
        #[case] fields: &[&str],
        #[case] expected_error: &str,
    ) {
        let record = record(fields);
        let error = convert_item_record(&record, "dummy#1").unwrap_err();
        assert!(error.contains(expected_error), "unexpected error: {}", error);
    }

    #[test]
    fn test_convert_price_record_short_row() {
        let record = record(&["PRC1", "S1", "Gadget", "MallOne", "0"]);
        let error = convert_price_record(&record, "dummy#1").unwrap_err();
        assert!(error.contains("missing 'price'"));
        assert!(error.contains("expected at least 6"));
    }

    #[test]
    fn test_convert_item_record_ignores_extra_fields() {
        let record = record(&["ITM5", "S1", "Widget", "http://img/5.png", "extra", "fields"]);
        let document = convert_item_record(&record, "dummy#1").unwrap();
        assert_eq!(document.id, "ITM5");
        assert_eq!(document.mid, 5);
    }

    #[test]
    fn test_convert_item_record_custom_agent() {
        let record = record(&["ITM1", "S1", "Widget", "t.png"]);
        let document = convert_item_record(&record, "robin#7").unwrap();
        assert_eq!(document.agent, "robin#7");
    }

    #[test]
    fn test_convert_does_not_validate_field_values() {
        // Empty names and thumbnails pass through untouched; only the id's
        // numeric suffix is interpreted.
        let record = record(&["ITM77", "", "", ""]);
        let document = convert_item_record(&record, "dummy#1").unwrap();
        assert_eq!(document.mid, 77);
        assert_eq!(document.data[0].item_name, "");
    }
}
