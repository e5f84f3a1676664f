//! Frontend Models
//!
//! View-level state shared by pages: fetch status and action notices.

use folio_core::{FolioError, FolioResult};

/// Fetch status of a page section
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Placeholder text to show instead of content
    Failed(String),
}

impl LoadState {
    /// `what` is the noun used in the placeholder ("blogs", "blog").
    pub fn failed(err: &FolioError, what: &str) -> Self {
        log::error!("loading {} failed: {}", what, err);
        LoadState::Failed(err.placeholder(what))
    }
}

/// Banner shown after a form action
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn from_result<T>(result: &FolioResult<T>, success: &str) -> Self {
        match result {
            Ok(_) => Notice::Success(success.to_string()),
            Err(e) => Notice::from_error(e),
        }
    }

    /// Validation messages are shown as-is; anything else is logged too.
    pub fn from_error(err: &FolioError) -> Self {
        match err {
            FolioError::Validation(msg) => Notice::Error(msg.clone()),
            e => {
                log::error!("action failed: {}", e);
                Notice::Error(format!("Something went wrong: {}", e))
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice-success",
            Notice::Error(_) => "notice notice-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_uses_placeholder() {
        let state = LoadState::failed(&FolioError::NotFound("blogs/x".into()), "blog");
        assert_eq!(state, LoadState::Failed("Blog not found.".into()));
    }

    #[test]
    fn test_notice_from_result() {
        let ok: FolioResult<()> = Ok(());
        assert_eq!(Notice::from_result(&ok, "Saved!"), Notice::Success("Saved!".into()));

        let invalid: FolioResult<()> = Err(FolioError::Validation("Please fill all fields.".into()));
        let notice = Notice::from_result(&invalid, "Saved!");
        assert_eq!(notice.text(), "Please fill all fields.");
        assert_eq!(notice.class(), "notice notice-error");

        let down: FolioResult<()> = Err(FolioError::service("Image upload failed (500)"));
        assert!(Notice::from_result(&down, "Saved!").text().contains("Image upload failed"));
    }
}
