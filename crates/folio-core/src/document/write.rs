//! Commit bodies for writes that need server-side timestamps.

use serde_json::{json, Value};

use super::Fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fails if the document already exists
    Create,
    /// Upsert that only touches the given fields (set with merge)
    Merge,
}

/// A single write inside a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    /// Full resource name of the target document
    pub name: String,
    pub fields: Fields,
    /// Fields set to the server's request time
    pub server_timestamps: Vec<String>,
    pub mode: WriteMode,
}

impl Write {
    pub fn to_json(&self) -> Value {
        let mut write = json!({
            "update": {
                "name": self.name,
                "fields": self.fields,
            }
        });

        match self.mode {
            WriteMode::Create => {
                write["currentDocument"] = json!({ "exists": false });
            }
            WriteMode::Merge => {
                let paths: Vec<&String> = self.fields.keys().collect();
                write["updateMask"] = json!({ "fieldPaths": paths });
            }
        }

        if !self.server_timestamps.is_empty() {
            let transforms: Vec<Value> = self
                .server_timestamps
                .iter()
                .map(|path| json!({ "fieldPath": path, "setToServerValue": "REQUEST_TIME" }))
                .collect();
            write["updateTransforms"] = Value::Array(transforms);
        }

        write
    }
}

pub fn commit_body(writes: &[Write]) -> Value {
    json!({ "writes": writes.iter().map(Write::to_json).collect::<Vec<_>>() })
}

/// Query parameters restricting a PATCH to exactly the given fields.
pub fn update_mask_params(fields: &Fields) -> Vec<(String, String)> {
    fields
        .keys()
        .map(|key| ("updateMask.fieldPaths".to_string(), key.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldValue;

    #[test]
    fn test_create_write_guards_existence() {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::string("Ada"));
        let write = Write {
            name: "projects/p/databases/(default)/documents/messages/m1".into(),
            fields,
            server_timestamps: vec!["createdAt".into()],
            mode: WriteMode::Create,
        };
        let body = commit_body(&[write]);
        let w = &body["writes"][0];
        assert_eq!(w["currentDocument"]["exists"], false);
        assert_eq!(w["update"]["fields"]["name"]["stringValue"], "Ada");
        assert_eq!(w["updateTransforms"][0]["fieldPath"], "createdAt");
        assert_eq!(w["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");
        assert!(w.get("updateMask").is_none());
    }

    #[test]
    fn test_merge_write_masks_only_given_fields() {
        let write = Write {
            name: "n".into(),
            fields: Fields::new(),
            server_timestamps: vec!["lastActive".into()],
            mode: WriteMode::Merge,
        };
        let json = write.to_json();
        assert_eq!(json["updateMask"]["fieldPaths"], serde_json::json!([]));
        assert!(json.get("currentDocument").is_none());
    }

    #[test]
    fn test_update_mask_params() {
        let mut fields = Fields::new();
        fields.insert("title".into(), FieldValue::string("t"));
        fields.insert("author".into(), FieldValue::string("a"));
        assert_eq!(
            update_mask_params(&fields),
            vec![
                ("updateMask.fieldPaths".to_string(), "author".to_string()),
                ("updateMask.fieldPaths".to_string(), "title".to_string()),
            ]
        );
    }
}
