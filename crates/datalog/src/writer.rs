//! Record Rendering
//!
//! One fact record becomes one pretty-printed JSON object block.
//! Serialization goes through serde, so string escaping and separator
//! placement are structurally correct; key order is fixed by the
//! record type (`permission`, `data_type`, payload fields in insertion
//! order, `timestamp`, `user_consent`).

use consent_core::{FactRecord, Result};

/// Render a record as its on-disk block: a pretty-printed JSON object
/// followed by a blank-line separator.
pub fn render(record: &FactRecord) -> Result<String> {
    let mut block = serde_json::to_string_pretty(record)?;
    block.push('\n');
    block.push('\n');
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use consent_core::{FactKind, FieldValue, PermissionKind};
    use indexmap::IndexMap;

    fn sample_record() -> FactRecord {
        let mut fields = IndexMap::new();
        fields.insert("value".to_string(), FieldValue::Int(42));
        FactRecord::new(PermissionKind::Contacts, FactKind::ContactCount, fields)
    }

    #[test]
    fn test_block_shape() {
        let block = render(&sample_record()).unwrap();

        assert!(block.starts_with("{\n"));
        assert!(block.ends_with("}\n\n"));
        assert!(block.contains("\"permission\": \"READ_CONTACTS\""));
        assert!(block.contains("\"data_type\": \"contact_count\""));
        assert!(block.contains("\"value\": 42"));
        assert!(block.contains("\"user_consent\": true"));
    }

    #[test]
    fn test_no_dangling_comma() {
        let block = render(&sample_record()).unwrap();
        assert!(!block.contains(",\n}"));
    }

    #[test]
    fn test_key_order() {
        let block = render(&sample_record()).unwrap();
        let order = [
            "\"permission\"",
            "\"data_type\"",
            "\"value\"",
            "\"timestamp\"",
            "\"user_consent\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|key| block.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_string_values_are_escaped() {
        let mut fields = IndexMap::new();
        fields.insert(
            "note".to_string(),
            FieldValue::Text("line\"break\nquote".to_string()),
        );
        let record = FactRecord::new(PermissionKind::Storage, FactKind::AppStorageInfo, fields);

        let block = render(&record).unwrap();
        assert!(block.contains(r#"line\"break\nquote"#));
    }

    #[test]
    fn test_block_parses_back_as_json() {
        let block = render(&sample_record()).unwrap();
        let value: serde_json::Value = serde_json::from_str(block.trim_end()).unwrap();
        assert_eq!(value["permission"], "READ_CONTACTS");
        assert_eq!(value["value"], 42);
        assert_eq!(value["user_consent"], true);
    }
}
