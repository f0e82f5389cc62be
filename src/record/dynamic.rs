//! Records with fields looked up by runtime name
//!
//! Lookup is explicit and fallible: an absent member is `None`, a member of
//! the wrong type is `None` from the typed accessors and a
//! `RecordError::TypeMismatch` from the `expect_*` accessors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{RecordError, RecordResult};
use super::value::FieldValue;

/// Mapping from field name to tagged value.
///
/// Fields are kept in name order so iteration and serialization are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl DynamicRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from name/value pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { fields }
    }

    /// Builds a record from a JSON object of scalars.
    pub fn from_json(value: &serde_json::Value) -> RecordResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| RecordError::NotAnObject(json_type_name(value)))?;

        let mut fields = BTreeMap::new();
        for (key, raw) in obj {
            fields.insert(key.clone(), FieldValue::from_json(key, raw)?);
        }
        Ok(Self { fields })
    }

    /// Converts to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let obj = self
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(obj)
    }

    /// Sets a field, returning the record for chaining
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a member by name
    pub fn member(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.member(name).and_then(FieldValue::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.member(name).and_then(FieldValue::as_i64)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.member(name).and_then(FieldValue::as_f64)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.member(name).and_then(FieldValue::as_bool)
    }

    /// Like [`text`](Self::text) but reports why the lookup failed
    pub fn expect_text(&self, name: &str) -> RecordResult<&str> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| mismatch(name, "text", value))
    }

    /// Like [`int`](Self::int) but reports why the lookup failed
    pub fn expect_int(&self, name: &str) -> RecordResult<i64> {
        let value = self.require(name)?;
        value.as_i64().ok_or_else(|| mismatch(name, "int", value))
    }

    fn require(&self, name: &str) -> RecordResult<&FieldValue> {
        self.member(name)
            .ok_or_else(|| RecordError::MissingField(name.to_string()))
    }

    /// Renders the named members separated by spaces.
    ///
    /// Absent members render as empty strings.
    pub fn render(&self, members: &[&str]) -> String {
        members
            .iter()
            .map(|name| {
                self.member(name)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Iterates fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn mismatch(field: &str, expected: &'static str, actual: &FieldValue) -> RecordError {
    RecordError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> DynamicRecord {
        DynamicRecord::new().with("name", "Alice").with("age", 25)
    }

    #[test]
    fn test_member_lookup() {
        let record = alice();
        assert_eq!(record.member("name"), Some(&FieldValue::text("Alice")));
        assert_eq!(record.member("age"), Some(&FieldValue::Int(25)));
        assert_eq!(record.member("email"), None);
    }

    #[test]
    fn test_typed_accessors() {
        let record = alice();
        assert_eq!(record.text("name"), Some("Alice"));
        assert_eq!(record.int("age"), Some(25));
        assert_eq!(record.float("age"), Some(25.0));
        assert_eq!(record.int("name"), None);
        assert_eq!(record.bool("name"), None);
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let record = alice();
        assert_eq!(
            record.expect_int("name"),
            Err(RecordError::TypeMismatch {
                field: "name".into(),
                expected: "int",
                actual: "text",
            })
        );
        assert_eq!(
            record.expect_text("email"),
            Err(RecordError::MissingField("email".into()))
        );
        assert_eq!(record.expect_text("name"), Ok("Alice"));
    }

    #[test]
    fn test_render_members() {
        let record = alice();
        assert_eq!(record.render(&["name", "age"]), "Alice 25");
        assert_eq!(record.render(&["name", "missing"]), "Alice ");
    }

    #[test]
    fn test_from_json_object() {
        let record = DynamicRecord::from_json(&json!({"name": "Bob", "age": 30, "admin": true}))
            .unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.bool("admin"), Some(true));
        assert_eq!(record.to_json(), json!({"admin": true, "age": 30, "name": "Bob"}));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert_eq!(
            DynamicRecord::from_json(&json!([1, 2])),
            Err(RecordError::NotAnObject("array"))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let record: DynamicRecord = serde_json::from_value(json!({"name": "Alice", "age": 25})).unwrap();
        assert_eq!(record, alice());
    }
}
