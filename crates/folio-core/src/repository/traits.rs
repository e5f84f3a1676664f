//! Repository Layer - Core Traits
//!
//! Abstract interfaces for the document store. The REST client and the
//! in-memory store both implement them.
//!
//! Futures are not `Send`: the site runs on the browser's single-threaded
//! event loop.

use async_trait::async_trait;

use crate::document::{Collection, Document, Fields};
use crate::error::FolioResult;

use super::query::Query;

/// Read-only access, handed to list views.
#[async_trait(?Send)]
pub trait DocumentReader {
    /// Ordered and/or filtered read of one collection
    async fn run_query(&self, query: &Query) -> FolioResult<Vec<Document>>;

    /// Single document by id; `Ok(None)` when it does not exist
    async fn get(&self, collection: Collection, id: &str) -> FolioResult<Option<Document>>;
}

/// Full CRUD access, used by forms and the admin dashboard.
#[async_trait(?Send)]
pub trait DocumentWriter: DocumentReader {
    /// Create a document under a fresh id and return the id.
    /// Every field named in `stamp` is set to the server's time.
    async fn create(&self, collection: Collection, fields: Fields, stamp: &[&str]) -> FolioResult<String>;

    /// Upsert touching only `fields` and the `stamp` fields.
    async fn merge(&self, collection: Collection, id: &str, fields: Fields, stamp: &[&str]) -> FolioResult<()>;

    /// Partial update of an existing document
    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> FolioResult<()>;

    async fn delete(&self, collection: Collection, id: &str) -> FolioResult<()>;
}
