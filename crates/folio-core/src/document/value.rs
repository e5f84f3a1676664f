//! Typed field values in the document store's JSON encoding.
//!
//! Each value is a single-key object naming its type, e.g.
//! `{"stringValue": "hi"}` or `{"arrayValue": {"values": [...]}}`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    #[serde(rename = "nullValue")]
    Null(()),
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    #[serde(rename = "integerValue")]
    Integer(Integer),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "timestampValue")]
    Timestamp(DateTime<Utc>),
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "bytesValue")]
    Bytes(String),
    #[serde(rename = "referenceValue")]
    Reference(String),
    #[serde(rename = "geoPointValue")]
    GeoPoint(serde_json::Value),
    #[serde(rename = "arrayValue")]
    Array(ArrayValue),
    #[serde(rename = "mapValue")]
    Map(MapValue),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    /// Omitted by the store when the array is empty
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// 64-bit integer, string-encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer(pub i64);

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map(Integer).map_err(D::Error::custom),
            Raw::Number(n) => Ok(Integer(n)),
        }
    }
}

impl FieldValue {
    pub fn string(value: impl Into<String>) -> Self {
        FieldValue::String(value.into())
    }

    pub fn string_array(values: &[String]) -> Self {
        FieldValue::Array(ArrayValue {
            values: values.iter().cloned().map(FieldValue::String).collect(),
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_store_values() {
        let raw = json!({
            "title": {"stringValue": "Hello"},
            "views": {"integerValue": "42"},
            "published": {"booleanValue": true},
            "createdAt": {"timestampValue": "2024-05-01T10:00:00.123456Z"},
            "tags": {"arrayValue": {"values": [{"stringValue": "rust"}]}},
            "empty": {"arrayValue": {}},
            "gone": {"nullValue": null}
        });
        let fields: BTreeMap<String, FieldValue> = serde_json::from_value(raw).unwrap();
        assert_eq!(fields["title"].as_str(), Some("Hello"));
        assert_eq!(fields["views"], FieldValue::Integer(Integer(42)));
        assert_eq!(fields["published"].as_bool(), Some(true));
        assert!(fields["createdAt"].as_timestamp().is_some());
        assert_eq!(fields["empty"], FieldValue::Array(ArrayValue::default()));
        assert_eq!(fields["gone"], FieldValue::Null(()));
    }

    #[test]
    fn test_encode_uses_type_keys() {
        let value = serde_json::to_value(FieldValue::string_array(&["a".to_string()])).unwrap();
        assert_eq!(value, json!({"arrayValue": {"values": [{"stringValue": "a"}]}}));
        assert_eq!(serde_json::to_value(FieldValue::Integer(Integer(7))).unwrap(), json!({"integerValue": "7"}));
        assert_eq!(serde_json::to_value(FieldValue::Null(())).unwrap(), json!({"nullValue": null}));
    }
}
