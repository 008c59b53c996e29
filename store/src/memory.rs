//! In-memory collection storage.
//!
//! Collections are created implicitly on first insert and preserve
//! insertion order, so `find` with [`Filter::All`] returns documents in
//! the order they were written. The only operation that requires a
//! collection to already exist is [`MemoryStore::drop_collection`].

use paperbase_core::{
    CollectionRead, DocId, Document, DocumentError, FetchFuture, Filter, StoreError, Update,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Collections = HashMap<String, Vec<Document>>;

/// An in-memory document store.
///
/// # Thread Safety
///
/// All operations go through `&self`; the store is safe to share across
/// tasks. `Clone` produces another handle onto the same collections.
///
/// # Locking
///
/// A single `RwLock` guards all collections. Operations are short and
/// never hold the lock across an await point. A poisoned lock is recovered
/// rather than propagated: the stored data is plain JSON and stays
/// consistent even if a panicking reader died mid-read.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a single document, returning its id.
    ///
    /// The collection is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the collection already holds
    /// a document with the same id.
    pub fn insert_one(&self, collection: &str, doc: Document) -> Result<DocId, StoreError> {
        let mut collections = self.write();
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|existing| existing.id() == doc.id()) {
            return Err(StoreError::DuplicateId {
                collection: collection.to_string(),
                id: doc.id().clone(),
            });
        }

        let id = doc.id().clone();
        docs.push(doc);
        tracing::debug!(collection, id = %id, "inserted document");
        Ok(id)
    }

    /// Insert several documents, returning their ids in input order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] on the first duplicate;
    /// documents before it are already inserted, documents after it are
    /// not.
    pub fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<DocId>, StoreError> {
        docs.into_iter()
            .map(|doc| self.insert_one(collection, doc))
            .collect()
    }

    /// All documents matching the filter, in insertion order.
    ///
    /// An unknown collection behaves as an empty one.
    #[must_use]
    pub fn find(&self, collection: &str, filter: &Filter) -> Vec<Document> {
        self.read()
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default()
    }

    /// The first document matching the filter, in insertion order.
    #[must_use]
    pub fn find_one(&self, collection: &str, filter: &Filter) -> Option<Document> {
        self.read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned())
    }

    /// Patch the first document matching the filter.
    ///
    /// Returns the number of documents actually modified (0 or 1). A match
    /// whose stored values already equal the patch counts as unmodified.
    pub fn update_one(&self, collection: &str, filter: &Filter, update: &Update) -> u64 {
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        let Some(doc) = docs.iter_mut().find(|d| filter.matches(d)) else {
            return 0;
        };
        let modified = u64::from(update.apply(doc));
        tracing::debug!(collection, modified, "update_one");
        modified
    }

    /// Patch every document matching the filter, returning the modified
    /// count.
    pub fn update_many(&self, collection: &str, filter: &Filter, update: &Update) -> u64 {
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        let modified = docs
            .iter_mut()
            .filter(|d| filter.matches(d))
            .map(|d| u64::from(update.apply(d)))
            .sum();
        tracing::debug!(collection, modified, "update_many");
        modified
    }

    /// Replace the full body of the document with the given id.
    ///
    /// The id is kept; every other field comes from `record`. Returns
    /// `false` when no document with that id exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDocument`] when `record` does not
    /// serialize to a JSON object, or when it embeds an `_id` different
    /// from `id`. Letting an embedded `_id` win would store a document
    /// under an id the store never checked for uniqueness.
    pub fn replace<T: Serialize>(
        &self,
        collection: &str,
        id: &DocId,
        record: &T,
    ) -> Result<bool, StoreError> {
        let replacement = Document::from_record(Some(id.clone()), record)?;
        if replacement.id() != id {
            return Err(StoreError::InvalidDocument(DocumentError::IdMismatch {
                embedded: replacement.id().clone(),
                target: id.clone(),
            }));
        }
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(doc) = docs.iter_mut().find(|d| d.id() == id) else {
            return Ok(false);
        };
        *doc = replacement;
        tracing::debug!(collection, id = %id, "replaced document");
        Ok(true)
    }

    /// Delete the first document matching the filter, returning the
    /// deleted count (0 or 1).
    pub fn delete_one(&self, collection: &str, filter: &Filter) -> u64 {
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                let doc = docs.remove(index);
                tracing::debug!(collection, id = %doc.id(), "deleted document");
                1
            }
            None => 0,
        }
    }

    /// Delete every document matching the filter, returning the deleted
    /// count.
    pub fn delete_many(&self, collection: &str, filter: &Filter) -> u64 {
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        let before = docs.len();
        docs.retain(|d| !filter.matches(d));
        let deleted = (before - docs.len()) as u64;
        tracing::debug!(collection, deleted, "delete_many");
        deleted
    }

    /// Remove a collection and everything in it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCollection`] when the collection does
    /// not exist. Dropping is the one operation that refuses to treat a
    /// missing collection as an empty one.
    pub fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        let removed = self.write().remove(collection);
        match removed {
            Some(docs) => {
                tracing::debug!(collection, dropped = docs.len(), "dropped collection");
                Ok(())
            }
            None => Err(StoreError::UnknownCollection(collection.to_string())),
        }
    }

    /// Number of documents in a collection (0 when absent).
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.read().get(collection).map_or(0, Vec::len)
    }

    /// Whether a collection holds no documents.
    #[must_use]
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Names of all existing collections, sorted for determinism.
    #[must_use]
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove every collection (for test isolation).
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl CollectionRead for MemoryStore {
    fn fetch_all<'a>(&'a self, collection: &'a str) -> FetchFuture<'a, Vec<Document>> {
        Box::pin(async move { Ok(self.find(collection, &Filter::All)) })
    }

    fn fetch_by_id<'a>(
        &'a self,
        collection: &'a str,
        id: &'a DocId,
    ) -> FetchFuture<'a, Option<Document>> {
        Box::pin(async move { Ok(self.find_one(collection, &Filter::by_id(id))) })
    }
}
