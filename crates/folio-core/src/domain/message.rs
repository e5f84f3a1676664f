//! Message Entity
//!
//! Contact-form submissions stored in the `messages` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Listable};
use super::require_all;
use crate::error::FolioResult;
use crate::text::contains_ignore_case;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for Message {
    fn title(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn matches_text(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query) || contains_ignore_case(&self.message, query)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageDraft {
    pub fn validate(&self) -> FolioResult<()> {
        require_all(&[&self.name, &self.email, &self.message], "Please fill all fields.")
    }

    /// Copy with surrounding whitespace removed, as stored.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}
