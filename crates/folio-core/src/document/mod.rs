//! Document Layer
//!
//! The document store speaks Firestore's REST encoding. This module owns that
//! wire format: typed field values, document envelopes, resource paths, commit
//! bodies, and the codec between documents and domain records. Missing or
//! loosely-typed fields are defaulted here so the rest of the site only sees
//! well-formed records.

mod codec;
mod value;
mod write;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::parse_labels;
use crate::error::{FolioError, FolioResult};

pub use codec::{published_fields, IntoFields, Record};
pub use value::{ArrayValue, FieldValue, Integer, MapValue};
pub use write::{commit_body, update_mask_params, Write, WriteMode};

pub type Fields = BTreeMap<String, FieldValue>;

const API_ROOT: &str = "https://firestore.googleapis.com/v1";

/// Collections the site reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Blogs,
    Projects,
    Messages,
    Visitors,
    ActiveUsers,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Blogs => "blogs",
            Collection::Projects => "projects",
            Collection::Messages => "messages",
            Collection::Visitors => "visitors",
            Collection::ActiveUsers => "activeUsers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document: its id plus raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// Document envelope as returned by the REST API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
            create_time: None,
            update_time: None,
        }
    }

    /// The id is the last segment of the resource name.
    pub fn from_wire(wire: WireDocument) -> Self {
        let id = wire.name.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id,
            fields: wire.fields,
            create_time: wire.create_time,
            update_time: wire.update_time,
        }
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_str)
    }

    /// Trimmed string value, or `default` when missing or blank.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        match self.string(key).map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default.to_string(),
        }
    }

    pub fn require_string(&self, key: &str) -> FolioResult<String> {
        match self.string(key) {
            Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            _ => Err(FolioError::Decode(format!("document {} has no `{}`", self.id, key))),
        }
    }

    /// Label list from either an array of strings or comma-separated text.
    pub fn labels(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(FieldValue::Array(array)) => {
                let joined = array
                    .values
                    .iter()
                    .filter_map(FieldValue::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                parse_labels(&joined)
            }
            Some(FieldValue::String(raw)) => parse_labels(raw),
            _ => Vec::new(),
        }
    }

    pub fn bool(&self, key: &str) -> bool {
        self.fields.get(key).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.fields.get(key).and_then(FieldValue::as_timestamp)
    }
}

/// Resource paths and endpoint URLs for one project's default database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    project_id: String,
}

impl StoreLocation {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self { project_id: project_id.into() }
    }

    pub fn database(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }

    pub fn documents_root(&self) -> String {
        format!("{}/documents", self.database())
    }

    /// Full resource name, as used inside commit writes.
    pub fn document_name(&self, collection: Collection, id: &str) -> String {
        format!("{}/{}/{}", self.documents_root(), collection, id)
    }

    pub fn document_url(&self, collection: Collection, id: &str) -> String {
        format!("{}/{}", API_ROOT, self.document_name(collection, id))
    }

    pub fn run_query_url(&self) -> String {
        format!("{}/{}:runQuery", API_ROOT, self.documents_root())
    }

    pub fn commit_url(&self) -> String {
        format!("{}/{}/documents:commit", API_ROOT, self.database())
    }
}

#[derive(Deserialize)]
struct RunQueryRow {
    #[serde(default)]
    document: Option<WireDocument>,
}

/// Documents from a `runQuery` response, in server order.
///
/// The response is a JSON array; rows without a `document` only carry read
/// metadata (e.g. an empty result) and are dropped.
pub fn parse_run_query(body: serde_json::Value) -> FolioResult<Vec<Document>> {
    let rows: Vec<RunQueryRow> =
        serde_json::from_value(body).map_err(|e| FolioError::Decode(format!("runQuery response: {}", e)))?;
    Ok(rows
        .into_iter()
        .filter_map(|row| row.document)
        .map(Document::from_wire)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_wire_takes_last_segment() {
        let wire: WireDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/blogs/abc123",
            "fields": {"title": {"stringValue": "Hi"}},
            "createTime": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let doc = Document::from_wire(wire);
        assert_eq!(doc.id, "abc123");
        assert_eq!(doc.string("title"), Some("Hi"));
        assert!(doc.create_time.is_some());
    }

    #[test]
    fn test_labels_accept_array_or_text() {
        let mut fields = Fields::new();
        fields.insert("tags".into(), FieldValue::string_array(&["rust".into(), " wasm ".into()]));
        fields.insert("category".into(), FieldValue::string("Web, AI"));
        let doc = Document::new("d", fields);
        assert_eq!(doc.labels("tags"), vec!["rust", "wasm"]);
        assert_eq!(doc.labels("category"), vec!["Web", "AI"]);
        assert!(doc.labels("missing").is_empty());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let doc = Document::new("d", Fields::new());
        assert_eq!(doc.string_or("author", "Unknown"), "Unknown");
        assert!(!doc.bool("published"));
        assert!(doc.timestamp("createdAt").is_none());
        assert!(matches!(doc.require_string("title"), Err(FolioError::Decode(_))));
    }

    #[test]
    fn test_parse_run_query_skips_metadata_rows() {
        let body = json!([
            {"document": {"name": "x/blogs/a", "fields": {}}, "readTime": "2024-01-01T00:00:00Z"},
            {"readTime": "2024-01-01T00:00:00Z"}
        ]);
        let docs = parse_run_query(body).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "a");
    }

    #[test]
    fn test_store_location_urls() {
        let loc = StoreLocation::new("my-site");
        assert_eq!(
            loc.document_url(Collection::ActiveUsers, "u1"),
            "https://firestore.googleapis.com/v1/projects/my-site/databases/(default)/documents/activeUsers/u1"
        );
        assert_eq!(
            loc.run_query_url(),
            "https://firestore.googleapis.com/v1/projects/my-site/databases/(default)/documents:runQuery"
        );
        assert_eq!(
            loc.commit_url(),
            "https://firestore.googleapis.com/v1/projects/my-site/databases/(default)/documents:commit"
        );
    }
}
