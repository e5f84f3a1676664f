//! Collection queries and their `structuredQuery` encoding.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::document::{Collection, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "ASCENDING",
            Direction::Descending => "DESCENDING",
        }
    }
}

/// `field >= value`, the only comparison the site needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub at_least: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: Collection,
    pub order_by: Option<(String, Direction)>,
    pub filter: Option<FieldFilter>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn collection(collection: Collection) -> Self {
        Self {
            collection,
            order_by: None,
            filter: None,
            limit: None,
        }
    }

    pub fn newest_first(mut self, field: &str) -> Self {
        self.order_by = Some((field.to_string(), Direction::Descending));
        self
    }

    pub fn since(mut self, field: &str, at: DateTime<Utc>) -> Self {
        self.filter = Some(FieldFilter {
            field: field.to_string(),
            at_least: FieldValue::Timestamp(at),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request body for `documents:runQuery`.
    pub fn to_request_body(&self) -> Value {
        let mut query = json!({
            "from": [{ "collectionId": self.collection.as_str() }]
        });

        if let Some(filter) = &self.filter {
            query["where"] = json!({
                "fieldFilter": {
                    "field": { "fieldPath": filter.field },
                    "op": "GREATER_THAN_OR_EQUAL",
                    "value": filter.at_least,
                }
            });
        }
        if let Some((field, direction)) = &self.order_by {
            query["orderBy"] = json!([{
                "field": { "fieldPath": field },
                "direction": direction.as_str(),
            }]);
        }
        if let Some(limit) = self.limit {
            query["limit"] = json!(limit);
        }

        json!({ "structuredQuery": query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_limited_query() {
        let body = Query::collection(Collection::Projects).newest_first("createdAt").limit(3).to_request_body();
        assert_eq!(
            body,
            json!({
                "structuredQuery": {
                    "from": [{"collectionId": "projects"}],
                    "orderBy": [{"field": {"fieldPath": "createdAt"}, "direction": "DESCENDING"}],
                    "limit": 3
                }
            })
        );
    }

    #[test]
    fn test_since_filter() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T11:55:00Z").unwrap().with_timezone(&Utc);
        let body = Query::collection(Collection::ActiveUsers).since("lastActive", at).to_request_body();
        let filter = &body["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(filter["field"]["fieldPath"], "lastActive");
        assert_eq!(filter["op"], "GREATER_THAN_OR_EQUAL");
        assert_eq!(filter["value"]["timestampValue"], "2024-03-01T11:55:00Z");
        assert!(body["structuredQuery"].get("orderBy").is_none());
    }
}
