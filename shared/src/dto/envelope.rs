//! Request and reply envelopes.
//!
//! [`RequestEnvelope`] is the ordered set of named form fields sent to one
//! endpoint. Absent optional values are recorded as `None` and never reach the
//! wire. [`Envelope`] wraps the parsed reply object and knows how to find the
//! flag, the message and whichever payload key the endpoint happened to use.

use serde_json::{Map, Value};

use crate::utils::{value_as_flag, value_as_text};

/// Ordered named parameters for one backend call. All values are text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEnvelope {
    fields: Vec<(String, Option<String>)>,
}

impl RequestEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field that is always sent.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), Some(value.into())));
        self
    }

    /// Add a field that is sent only when `value` is `Some`.
    pub fn optional<V: Into<String>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.fields.push((name.into(), value.map(Into::into)));
        self
    }

    /// Fields that will be transmitted, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Value of a transmitted field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.present().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Number of declared fields, including absent ones.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for RequestEnvelope
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |env, (k, v)| env.optional(k, v))
    }
}

/// Parsed reply from the backend: `{ flag, msg?, error?, <payload-key>? }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope(Value);

impl Envelope {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `Some(flag)` when the reply carries a `flag` field.
    pub fn flag(&self) -> Option<bool> {
        self.0.get("flag").map(value_as_flag)
    }

    /// `msg`, falling back to `error`. Blank values count as absent.
    pub fn message(&self) -> Option<String> {
        ["msg", "error"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(value_as_text))
    }

    /// Records under the first of `keys` that holds an array.
    ///
    /// Non-object array elements are dropped. A reply without any of the keys
    /// yields an empty list.
    pub fn records(&self, keys: &[&str]) -> Vec<Map<String, Value>> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_array))
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_object().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Object under the first of `keys` that holds one.
    ///
    /// Some endpoints wrap a single summary object in a one-element array; that
    /// element is returned too.
    pub fn object(&self, keys: &[&str]) -> Option<Map<String, Value>> {
        keys.iter().find_map(|key| match self.0.get(*key)? {
            Value::Object(map) => Some(map.clone()),
            Value::Array(items) => items.first().and_then(Value::as_object).cloned(),
            _ => None,
        })
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Envelope {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_not_transmitted() {
        let env = RequestEnvelope::new()
            .field("officecode", "WF01")
            .optional("noofdays", None::<String>)
            .optional("condition", Some(">"));

        let sent: Vec<_> = env.present().collect();
        assert_eq!(sent, vec![("officecode", "WF01"), ("condition", ">")]);
        assert_eq!(env.len(), 3);
        assert_eq!(env.get("noofdays"), None);
    }

    #[test]
    fn test_empty_string_is_still_transmitted() {
        let env = RequestEnvelope::new().field("barcode", "");
        assert_eq!(env.get("barcode"), Some(""));
    }

    #[test]
    fn test_records_uses_first_array_key() {
        let env = Envelope::new(json!({
            "flag": true,
            "statement": "not an array",
            "statements": [{"id": "1"}, 7, {"id": "2"}],
            "data": [{"id": "ignored"}]
        }));
        let records = env.records(&["statement", "statements", "data"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], "2");
        assert!(env.records(&["missing"]).is_empty());
    }

    #[test]
    fn test_message_prefers_msg_then_error() {
        assert_eq!(
            Envelope::new(json!({"msg": "", "error": "boom"})).message(),
            Some("boom".to_string())
        );
        assert_eq!(Envelope::new(json!({"flag": false})).message(), None);
    }

    #[test]
    fn test_object_unwraps_single_element_array() {
        let env = Envelope::new(json!({"data": [{"pdcamt": "10"}]}));
        let summary = env.object(&["summary", "data"]).unwrap();
        assert_eq!(summary["pdcamt"], "10");
    }
}
