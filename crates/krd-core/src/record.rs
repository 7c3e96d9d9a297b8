use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row returned by the tabular data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub created_time: String,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
            created_time: String::new(),
        }
    }

    /// A field is present when it exists and is truthy.
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(is_truthy)
    }

    pub fn has_fields(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.has_field(key))
    }

    /// String form of a present field; `None` for absent or falsy values.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .filter(|v| is_truthy(v))
            .map(value_to_string)
    }
}

/// Body of a list-records response. `records` stays optional so an absent
/// field can be told apart from an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecordPage {
    pub records: Option<Vec<Record>>,
    pub offset: Option<String>,
}

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> Record {
        Record::new("rec1", fields.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let r = record(json!({
            "a": "",
            "b": null,
            "c": 0,
            "d": false,
            "e": "x",
            "f": 12,
            "g": []
        }));
        assert!(!r.has_field("a"));
        assert!(!r.has_field("b"));
        assert!(!r.has_field("c"));
        assert!(!r.has_field("d"));
        assert!(!r.has_field("missing"));
        assert!(r.has_field("e"));
        assert!(r.has_field("f"));
        assert!(r.has_field("g"));
    }

    #[test]
    fn text_coerces_scalars() {
        let r = record(json!({"price": 1200, "name": "SM58", "empty": ""}));
        assert_eq!(r.text("price").as_deref(), Some("1200"));
        assert_eq!(r.text("name").as_deref(), Some("SM58"));
        assert_eq!(r.text("empty"), None);
    }

    #[test]
    fn page_tells_absent_records_from_empty() {
        let absent: RecordPage = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(absent.records.is_none());

        let empty: RecordPage = serde_json::from_str(r#"{"records":[]}"#).unwrap();
        assert_eq!(empty.records.map(|r| r.len()), Some(0));
    }

    #[test]
    fn record_deserializes_wire_shape() {
        let page: RecordPage = serde_json::from_str(
            r#"{
                "records": [
                    {"id": "recA", "createdTime": "2024-05-01T08:00:00.000Z", "fields": {"title": "KRD"}}
                ],
                "offset": "itrNext"
            }"#,
        )
        .unwrap();
        let records = page.records.unwrap();
        assert_eq!(records[0].id, "recA");
        assert_eq!(records[0].created_time, "2024-05-01T08:00:00.000Z");
        assert_eq!(records[0].text("title").as_deref(), Some("KRD"));
        assert_eq!(page.offset.as_deref(), Some("itrNext"));
    }
}
