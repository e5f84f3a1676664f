//! Facet selections and free-text search.

use std::fmt;

use crate::domain::{same_label, Listable};

/// A dimension items can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Category,
    Tag,
}

impl Facet {
    pub fn values<T: Listable>(self, item: &T) -> &[String] {
        match self {
            Facet::Category => item.categories(),
            Facet::Tag => item.tags(),
        }
    }
}

/// Selected value of one facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FacetValue {
    #[default]
    All,
    Only(String),
}

impl FacetValue {
    pub const ALL: &'static str = "All";

    /// `"All"` or blank input clears the facet.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == Self::ALL {
            FacetValue::All
        } else {
            FacetValue::Only(raw.to_string())
        }
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            FacetValue::All => None,
            FacetValue::Only(value) => Some(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetValue::All)
    }

    /// True when this selection is exactly `value` (case-insensitive).
    pub fn is(&self, value: &str) -> bool {
        self.as_option().is_some_and(|selected| same_label(selected, value))
    }
}

impl From<&str> for FacetValue {
    fn from(raw: &str) -> Self {
        FacetValue::parse(raw)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or(Self::ALL))
    }
}

/// All active constraints; an item must satisfy every one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: FacetValue,
    pub tag: FacetValue,
    pub search: String,
}

impl Filter {
    pub fn facet(&self, facet: Facet) -> &FacetValue {
        match facet {
            Facet::Category => &self.category,
            Facet::Tag => &self.tag,
        }
    }

    pub fn set(&mut self, facet: Facet, value: FacetValue) {
        match facet {
            Facet::Category => self.category = value,
            Facet::Tag => self.tag = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_all() && self.tag.is_all() && self.search.trim().is_empty()
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        let facet_ok = |facet: Facet| match self.facet(facet).as_option() {
            None => true,
            Some(selected) => facet.values(item).iter().any(|v| same_label(v, selected)),
        };
        let query = self.search.trim();

        facet_ok(Facet::Category) && facet_ok(Facet::Tag) && (query.is_empty() || item.matches_text(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Project;

    fn project(title: &str, category: &str, tags: &[&str]) -> Project {
        let mut p = Project::new(title.to_lowercase(), title);
        p.categories = vec![category.to_string()];
        p.tags = tags.iter().map(|t| t.to_string()).collect();
        p.description = format!("{} built with care", title);
        p
    }

    #[test]
    fn test_parse_all_and_blank() {
        assert_eq!(FacetValue::parse("All"), FacetValue::All);
        assert_eq!(FacetValue::parse("  "), FacetValue::All);
        assert_eq!(FacetValue::parse(" Web "), FacetValue::Only("Web".into()));
        assert_eq!(FacetValue::All.to_string(), "All");
    }

    #[test]
    fn test_facets_are_anded() {
        let item = project("Site", "Web", &["rust", "wasm"]);
        let mut filter = Filter::default();
        assert!(filter.matches(&item));

        filter.set(Facet::Category, "web".into());
        assert!(filter.matches(&item));
        filter.set(Facet::Tag, "go".into());
        assert!(!filter.matches(&item));
        filter.set(Facet::Tag, "WASM".into());
        assert!(filter.matches(&item));
    }

    #[test]
    fn test_search_covers_description() {
        let item = project("Site", "Web", &[]);
        let filter = Filter {
            search: "CARE".into(),
            ..Filter::default()
        };
        assert!(filter.matches(&item));
        let filter = Filter {
            search: "nothing".into(),
            ..Filter::default()
        };
        assert!(!filter.matches(&item));
    }
}
