//! Project Entity
//!
//! A portfolio project as stored in the `projects` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable};
use super::labels::parse_labels;
use super::require_all;
use crate::error::{FolioError, FolioResult};
use crate::text::contains_ignore_case;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Screenshot shown on the card and in the live-demo modal
    pub image_url: String,
    pub live_url: String,
    pub github_url: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            tech_stack: Vec::new(),
            published: false,
            created_at: None,
        }
    }
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn matches_text(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query) || contains_ignore_case(&self.description, query)
    }
}

const PROJECT_FIELDS_MSG: &str = "Please fill all project fields, including Live URL and GitHub URL!";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub live_url: String,
    pub github_url: String,
    pub category: String,
    pub tags: String,
    pub image_url: String,
}

impl ProjectDraft {
    pub fn validate(&self, has_image: bool) -> FolioResult<()> {
        require_all(
            &[&self.title, &self.description, &self.live_url, &self.github_url, &self.category, &self.tags],
            PROJECT_FIELDS_MSG,
        )?;
        if !has_image {
            return Err(FolioError::Validation(PROJECT_FIELDS_MSG.to_string()));
        }
        Ok(())
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_labels(&self.tags)
    }
}

/// Fields an admin may change on an existing project. `tags` is raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: String,
    pub description: String,
    pub live_url: String,
    pub github_url: String,
    pub tags: String,
}

impl ProjectPatch {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            live_url: project.live_url.clone(),
            github_url: project.github_url.clone(),
            tags: project.tags.join(", "),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        require_all(
            &[&self.title, &self.description, &self.live_url, &self.github_url, &self.tags],
            PROJECT_FIELDS_MSG,
        )
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_labels(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Folio".into(),
            description: "This site".into(),
            live_url: "https://example.com".into(),
            github_url: "https://github.com/me/folio".into(),
            category: "Web".into(),
            tags: "rust, leptos".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(full_draft().validate(true).is_ok());
        assert!(full_draft().validate(false).is_err());

        let missing_live = ProjectDraft { live_url: String::new(), ..full_draft() };
        assert_eq!(missing_live.validate(true).unwrap_err().to_string(), PROJECT_FIELDS_MSG);
    }

    #[test]
    fn test_patch_round_trips_tags() {
        let mut project = Project::new("p1", "Folio");
        project.tags = vec!["rust".into(), "wasm".into()];
        let patch = ProjectPatch::from_project(&project);
        assert_eq!(patch.tags, "rust, wasm");
        assert_eq!(patch.tag_list(), project.tags);
    }

    #[test]
    fn test_search_covers_description() {
        let mut project = Project::new("p1", "Folio");
        project.description = "A Leptos portfolio".into();
        assert!(project.matches_text("PORTFOLIO"));
    }
}
