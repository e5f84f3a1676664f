//! Site-wide error type
//!
//! The site only ever tells three situations apart: a referenced document is
//! missing, a remote service failed, or a form is incomplete. Decode errors are
//! kept separate so malformed documents can be skipped without hiding outages.

use thiserror::Error;

pub type FolioResult<T> = Result<T, FolioError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolioError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("{0}")]
    Validation(String),

    #[error("malformed document: {0}")]
    Decode(String),
}

impl FolioError {
    pub fn service(msg: impl std::fmt::Display) -> Self {
        FolioError::Service(msg.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound(_))
    }

    /// Placeholder text shown in place of a list or document that failed to load.
    ///
    /// `what` is the lowercase noun used on the page ("blogs", "blog", "projects").
    pub fn placeholder(&self, what: &str) -> String {
        match self {
            FolioError::NotFound(_) => format!("{} not found.", capitalize(what)),
            FolioError::Validation(msg) => msg.clone(),
            FolioError::Service(_) | FolioError::Decode(_) => format!("Error loading {}.", what),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
