//! Blog Entity
//!
//! A blog post as stored in the `blogs` collection, plus the admin drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable};
use super::labels::{join_labels, parse_labels};
use super::require_all;
use crate::error::{FolioError, FolioResult};
use crate::text::{contains_ignore_case, excerpt, slugify};

/// A published or draft blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// Markdown body
    pub content: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blog {
    pub const UNKNOWN_AUTHOR: &'static str = "Unknown";

    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            image_url: String::new(),
            categories: Vec::new(),
            author: Self::UNKNOWN_AUTHOR.to_string(),
            tags: Vec::new(),
            featured: false,
            published: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.content, max_chars)
    }

    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "Uncategorized".to_string()
        } else {
            join_labels(&self.categories)
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Route of the single-post page. Only `id` is used for lookup.
    pub fn permalink(&self) -> String {
        format!("/blog/post?id={}&slug={}", self.id, self.slug())
    }
}

impl Entity for Blog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for Blog {
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
        contains_ignore_case(&self.title, query) || contains_ignore_case(&self.content, query)
    }
}

/// New-post form input. `tags` is the raw comma-separated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub author: String,
    /// Filled in after the image upload succeeds
    pub image_url: String,
}

impl BlogDraft {
    /// Checks required fields before the image is uploaded.
    pub fn validate(&self, has_image: bool) -> FolioResult<()> {
        const MSG: &str = "Fill all blog fields!";
        require_all(&[&self.title, &self.content, &self.category, &self.author], MSG)?;
        if !has_image {
            return Err(FolioError::Validation(MSG.to_string()));
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

/// Fields an admin may change on an existing post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPatch {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl BlogPatch {
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            content: blog.content.clone(),
            author: blog.author.clone(),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        require_all(&[&self.title, &self.content, &self.author], "Title, content and author are required.")
    }
}
