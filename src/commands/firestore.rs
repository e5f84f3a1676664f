//! Document Store Client
//!
//! REST implementation of the store traits. Reads go through `runQuery` and
//! single-document GETs; creates and merges go through `commit` so server
//! timestamps can be requested.

use async_trait::async_trait;
use folio_core::document::{
    commit_body, parse_run_query, update_mask_params, Collection, Document, Fields, StoreLocation, WireDocument,
    Write, WriteMode,
};
use folio_core::repository::{DocumentReader, DocumentWriter, Query};
use folio_core::{FolioError, FolioResult};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::json;

use super::{expect_json, service_error};

pub struct FirestoreClient {
    http: reqwest::Client,
    location: StoreLocation,
    api_key: String,
    id_token: Option<String>,
}

impl FirestoreClient {
    pub fn new(project_id: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            location: StoreLocation::new(project_id),
            api_key: api_key.to_string(),
            id_token: None,
        }
    }

    /// Authenticate requests as the signed-in admin.
    pub fn with_token(mut self, id_token: Option<String>) -> Self {
        self.id_token = id_token;
        self
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let req = self.http.request(method, url).query(&[("key", self.api_key.as_str())]);
        match &self.id_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn commit(&self, write: Write) -> FolioResult<()> {
        let resp = self
            .request(Method::POST, &self.location.commit_url())
            .json(&commit_body(&[write]))
            .send()
            .await
            .map_err(service_error)?;
        expect_json(resp).await.map(|_| ())
    }
}

/// Client-side id for new documents.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn stamps(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[async_trait(?Send)]
impl DocumentReader for FirestoreClient {
    async fn run_query(&self, query: &Query) -> FolioResult<Vec<Document>> {
        let resp = self
            .request(Method::POST, &self.location.run_query_url())
            .json(&query.to_request_body())
            .send()
            .await
            .map_err(service_error)?;
        parse_run_query(expect_json(resp).await?)
    }

    async fn get(&self, collection: Collection, id: &str) -> FolioResult<Option<Document>> {
        let resp = self
            .request(Method::GET, &self.location.document_url(collection, id))
            .send()
            .await
            .map_err(service_error)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let wire: WireDocument = serde_json::from_value(expect_json(resp).await?)
            .map_err(|e| FolioError::Decode(format!("{}/{}: {}", collection, id, e)))?;
        Ok(Some(Document::from_wire(wire)))
    }
}

#[async_trait(?Send)]
impl DocumentWriter for FirestoreClient {
    async fn create(&self, collection: Collection, fields: Fields, stamp: &[&str]) -> FolioResult<String> {
        let id = new_document_id();
        self.commit(Write {
            name: self.location.document_name(collection, &id),
            fields,
            server_timestamps: stamps(stamp),
            mode: WriteMode::Create,
        })
        .await?;
        Ok(id)
    }

    async fn merge(&self, collection: Collection, id: &str, fields: Fields, stamp: &[&str]) -> FolioResult<()> {
        self.commit(Write {
            name: self.location.document_name(collection, id),
            fields,
            server_timestamps: stamps(stamp),
            mode: WriteMode::Merge,
        })
        .await
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> FolioResult<()> {
        let resp = self
            .request(Method::PATCH, &self.location.document_url(collection, id))
            .query(&update_mask_params(&fields))
            .query(&[("currentDocument.exists", "true")])
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .map_err(service_error)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(FolioError::NotFound(format!("{}/{}", collection, id)));
        }
        expect_json(resp).await.map(|_| ())
    }

    async fn delete(&self, collection: Collection, id: &str) -> FolioResult<()> {
        let resp = self
            .request(Method::DELETE, &self.location.document_url(collection, id))
            .send()
            .await
            .map_err(service_error)?;
        expect_json(resp).await.map(|_| ())
    }
}
