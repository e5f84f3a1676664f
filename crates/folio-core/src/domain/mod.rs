//! Domain Layer
//!
//! Typed records for every store collection, the drafts the admin forms
//! produce, and the small amount of analytics the dashboard derives.
//! This layer has NO store or browser dependencies.

mod analytics;
mod blog;
mod entity;
mod labels;
mod message;
mod project;

pub use analytics::{active_since, count_active, daily_counts, ActiveUser, DailyCount, Visitor, ACTIVE_WINDOW_MINUTES};
pub use blog::{Blog, BlogDraft, BlogPatch};
pub use entity::{Entity, Listable};
pub use labels::{join_labels, parse_labels, same_label};
pub use message::{Message, MessageDraft};
pub use project::{Project, ProjectDraft, ProjectPatch};

use crate::error::{FolioError, FolioResult};

/// Fails with `msg` when any of `fields` is blank.
fn require_all(fields: &[&str], msg: &str) -> FolioResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(FolioError::Validation(msg.to_string()));
    }
    Ok(())
}
