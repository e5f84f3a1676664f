//! Typed repository over a document store.

use std::marker::PhantomData;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::document::{published_fields, Document, IntoFields, Record};
use crate::error::{FolioError, FolioResult};

use super::query::Query;
use super::traits::{DocumentReader, DocumentWriter};

/// Reads and writes one record type against a shared store.
pub struct Repository<T, S: ?Sized> {
    store: Rc<S>,
    _record: PhantomData<T>,
}

impl<T, S: ?Sized> Clone for Repository<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

/// Decode rows, skipping documents that cannot form a record.
fn decode_all<T: Record>(docs: Vec<Document>) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match T::from_document(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping {}/{}: {}", T::COLLECTION, doc.id, e);
                None
            }
        })
        .collect()
}

impl<T: Record, S: DocumentReader + ?Sized> Repository<T, S> {
    pub fn new(store: Rc<S>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records, newest first.
    pub async fn list(&self) -> FolioResult<Vec<T>> {
        let query = Query::collection(T::COLLECTION).newest_first(T::ORDER_FIELD);
        let docs = self.store.run_query(&query).await?;
        log::debug!("fetched {} {}", docs.len(), T::COLLECTION);
        Ok(decode_all(docs))
    }

    /// Every record in store order, including those missing the order field.
    pub async fn all(&self) -> FolioResult<Vec<T>> {
        let docs = self.store.run_query(&Query::collection(T::COLLECTION)).await?;
        log::debug!("fetched {} {} unordered", docs.len(), T::COLLECTION);
        Ok(decode_all(docs))
    }

    /// The `limit` newest records.
    pub async fn recent(&self, limit: usize) -> FolioResult<Vec<T>> {
        let query = Query::collection(T::COLLECTION).newest_first(T::ORDER_FIELD).limit(limit);
        Ok(decode_all(self.store.run_query(&query).await?))
    }

    /// Records whose order field is at or after `at`, in store order.
    pub async fn since(&self, at: DateTime<Utc>) -> FolioResult<Vec<T>> {
        let query = Query::collection(T::COLLECTION).since(T::ORDER_FIELD, at);
        Ok(decode_all(self.store.run_query(&query).await?))
    }

    pub async fn find_by_id(&self, id: &str) -> FolioResult<T> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(doc) => T::from_document(&doc),
            None => Err(FolioError::NotFound(format!("{}/{}", T::COLLECTION, id))),
        }
    }
}

impl<T: Record, S: DocumentWriter + ?Sized> Repository<T, S> {
    /// Store a new record; the order field is set by the server.
    pub async fn create(&self, input: impl IntoFields) -> FolioResult<String> {
        let id = self
            .store
            .create(T::COLLECTION, input.into_fields(), &[T::ORDER_FIELD])
            .await?;
        log::info!("created {}/{}", T::COLLECTION, id);
        Ok(id)
    }

    pub async fn update(&self, id: &str, patch: impl IntoFields) -> FolioResult<()> {
        self.store.update(T::COLLECTION, id, patch.into_fields()).await?;
        log::info!("updated {}/{}", T::COLLECTION, id);
        Ok(())
    }

    pub async fn set_published(&self, id: &str, published: bool) -> FolioResult<()> {
        self.store.update(T::COLLECTION, id, published_fields(published)).await?;
        log::info!("{}/{} published={}", T::COLLECTION, id, published);
        Ok(())
    }

    /// Upsert `id`, refreshing only its order field to the server time.
    pub async fn touch(&self, id: &str) -> FolioResult<()> {
        self.store
            .merge(T::COLLECTION, id, Default::default(), &[T::ORDER_FIELD])
            .await
    }

    pub async fn delete(&self, id: &str) -> FolioResult<()> {
        self.store.delete(T::COLLECTION, id).await?;
        log::info!("deleted {}/{}", T::COLLECTION, id);
        Ok(())
    }
}
