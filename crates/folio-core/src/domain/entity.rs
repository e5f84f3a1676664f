//! Domain Layer - Core Entity Traits
//!
//! Every stored record has a store-assigned string id. Records that appear in
//! paginated lists additionally expose the facets the list view filters on.

use chrono::{DateTime, Utc};

use crate::text::contains_ignore_case;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// A record shown in a filterable, paginated list.
pub trait Listable: Entity {
    fn title(&self) -> &str;

    /// Category values; most records carry zero or one.
    fn categories(&self) -> &[String] {
        &[]
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    /// Store-assigned creation time. `None` while a server timestamp is pending.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Free-text search over the record. Defaults to the title only.
    fn matches_text(&self, query: &str) -> bool {
        contains_ignore_case(self.title(), query)
    }
}
