//! In-memory document store.
//!
//! Mirrors the query semantics the site relies on: ordering drops documents
//! missing the order field, `since` compares timestamps, and stamp fields get
//! the store's clock. The clock advances one second per write so ordering in
//! tests is deterministic.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::document::{Collection, Document, FieldValue, Fields};
use crate::error::{FolioError, FolioResult};

use super::query::{Direction, Query};
use super::traits::{DocumentReader, DocumentWriter};

pub struct MemoryStore {
    docs: RefCell<HashMap<Collection, Vec<Document>>>,
    clock: Cell<DateTime<Utc>>,
    next_id: Cell<u64>,
    offline: Cell<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: RefCell::new(HashMap::new()),
            clock: Cell::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()),
            next_id: Cell::new(1),
            offline: Cell::new(false),
        }
    }

    /// Current store time
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.get()
    }

    pub fn set_now(&self, at: DateTime<Utc>) {
        self.clock.set(at);
    }

    /// While offline every call fails with a service error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Seed a document as-is, replacing any with the same id.
    pub fn insert(&self, collection: Collection, doc: Document) {
        let mut docs = self.docs.borrow_mut();
        let list = docs.entry(collection).or_default();
        list.retain(|d| d.id != doc.id);
        list.push(doc);
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.docs.borrow().get(&collection).map_or(0, Vec::len)
    }

    fn check_online(&self) -> FolioResult<()> {
        if self.offline.get() {
            return Err(FolioError::service("store unreachable"));
        }
        Ok(())
    }

    fn tick(&self) -> DateTime<Utc> {
        let now = self.clock.get() + Duration::seconds(1);
        self.clock.set(now);
        now
    }

    fn stamp(&self, fields: &mut Fields, stamp: &[&str]) {
        if stamp.is_empty() {
            return;
        }
        let now = self.tick();
        for field in stamp {
            fields.insert(field.to_string(), FieldValue::Timestamp(now));
        }
    }
}

#[async_trait(?Send)]
impl DocumentReader for MemoryStore {
    async fn run_query(&self, query: &Query) -> FolioResult<Vec<Document>> {
        self.check_online()?;

        let docs = self.docs.borrow();
        let mut rows: Vec<Document> = docs.get(&query.collection).cloned().unwrap_or_default();

        if let Some(filter) = &query.filter {
            let floor = filter.at_least.as_timestamp();
            rows.retain(|doc| match (doc.timestamp(&filter.field), floor) {
                (Some(at), Some(floor)) => at >= floor,
                _ => false,
            });
        }

        if let Some((field, direction)) = &query.order_by {
            rows.retain(|doc| doc.fields.contains_key(field));
            rows.sort_by_key(|doc| doc.timestamp(field));
            if *direction == Direction::Descending {
                rows.reverse();
            }
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn get(&self, collection: Collection, id: &str) -> FolioResult<Option<Document>> {
        self.check_online()?;
        Ok(self
            .docs
            .borrow()
            .get(&collection)
            .and_then(|list| list.iter().find(|d| d.id == id).cloned()))
    }
}

#[async_trait(?Send)]
impl DocumentWriter for MemoryStore {
    async fn create(&self, collection: Collection, mut fields: Fields, stamp: &[&str]) -> FolioResult<String> {
        self.check_online()?;

        let n = self.next_id.get();
        self.next_id.set(n + 1);
        let id = format!("{}-{}", collection, n);

        self.stamp(&mut fields, stamp);
        let mut doc = Document::new(id.clone(), fields);
        doc.create_time = Some(self.now());
        doc.update_time = doc.create_time;
        self.insert(collection, doc);
        Ok(id)
    }

    async fn merge(&self, collection: Collection, id: &str, mut fields: Fields, stamp: &[&str]) -> FolioResult<()> {
        self.check_online()?;
        self.stamp(&mut fields, stamp);

        let mut docs = self.docs.borrow_mut();
        let list = docs.entry(collection).or_default();
        match list.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.fields.extend(fields);
                doc.update_time = Some(self.now());
            }
            None => {
                let mut doc = Document::new(id, fields);
                doc.create_time = Some(self.now());
                doc.update_time = doc.create_time;
                list.push(doc);
            }
        }
        Ok(())
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> FolioResult<()> {
        self.check_online()?;
        let now = self.tick();

        let mut docs = self.docs.borrow_mut();
        let doc = docs
            .get_mut(&collection)
            .and_then(|list| list.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| FolioError::NotFound(format!("{}/{}", collection, id)))?;
        doc.fields.extend(fields);
        doc.update_time = Some(now);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> FolioResult<()> {
        self.check_online()?;
        if let Some(list) = self.docs.borrow_mut().get_mut(&collection) {
            list.retain(|d| d.id != id);
        }
        Ok(())
    }
}
