// src/models/record.rs

//! A single entry of the results collection.

use serde_json::Value;

/// Raw JSON body returned by one archive endpoint.
///
/// The shape is whatever the endpoint sent; only the optional `title` and
/// `description` fields are ever read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord(Value);

impl ResultRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The parsed body as received.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// `title` field, if present and printable.
    pub fn title(&self) -> Option<String> {
        self.text_field("title")
    }

    /// `description` field, if present and printable.
    pub fn description(&self) -> Option<String> {
        self.text_field("description")
    }

    /// Strings are returned verbatim and numbers as their JSON text; any
    /// other value (including a missing key on a non-object body) is `None`.
    fn text_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for ResultRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_string_fields() {
        let record = ResultRecord::new(json!({"title": "T1", "description": "D1"}));
        assert_eq!(record.title().as_deref(), Some("T1"));
        assert_eq!(record.description().as_deref(), Some("D1"));
    }

    #[test]
    fn test_array_body_has_no_fields() {
        let record = ResultRecord::new(json!([["a"], ["b"]]));
        assert_eq!(record.title(), None);
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_non_text_values_are_blank() {
        let record = ResultRecord::new(json!({
            "title": 42,
            "description": {"nested": true}
        }));
        assert_eq!(record.title().as_deref(), Some("42"));
        assert_eq!(record.description(), None);

        let record = ResultRecord::new(json!({"title": null, "description": false}));
        assert_eq!(record.title(), None);
        assert_eq!(record.description(), None);
    }
}
