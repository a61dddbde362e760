use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Decodes a persisted JSON array leniently.
///
/// A corrupt payload or a non-array top level yields an empty vec, and
/// elements that do not match the record shape are dropped one by one. A
/// damaged ledger degrades to "nothing stored" instead of an error;
/// `context` names the ledger in the log line.
pub fn decode_array<T: DeserializeOwned>(raw: &str, context: &str) -> Vec<T> {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("Treating corrupt {} payload as empty: {}", context, err);
            return Vec::new();
        }
    };

    let serde_json::Value::Array(elements) = parsed else {
        warn!("Treating non-array {} payload as empty", context);
        return Vec::new();
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();

    if records.len() < total {
        debug!(
            "Dropped {} malformed record(s) from {}",
            total - records.len(),
            context
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        name: String,
    }

    #[test]
    fn test_corrupt_payload_is_empty() {
        let records: Vec<Record> = decode_array("{not json", "test ledger");
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        let records: Vec<Record> = decode_array("{\"name\":\"solo\"}", "test ledger");
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_elements_are_dropped_individually() {
        let raw = r#"[{"name":"a"}, 42, null, {"name":7}, {"name":"b"}]"#;
        let records: Vec<Record> = decode_array(raw, "test ledger");
        assert_eq!(
            records,
            vec![
                Record {
                    name: "a".to_string()
                },
                Record {
                    name: "b".to_string()
                }
            ]
        );
    }
}
