//! Folio Core
//!
//! Layered architecture:
//! - domain: Typed records, drafts and validation
//! - document: Store wire format and record codec
//! - repository: Store abstractions, typed repository, in-memory store
//! - view_model: Client-side list pagination and filtering
//!
//! Nothing in this crate touches the browser, so all of it is tested on the host.

pub mod auth;
pub mod document;
pub mod domain;
pub mod error;
pub mod repository;
pub mod seo;
pub mod text;
pub mod upload;
pub mod view_model;

pub use error::{FolioError, FolioResult};
