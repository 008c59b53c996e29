//! The collection read interface.
//!
//! This trait is the seam between read models and whatever holds the
//! documents. Read models only ever need two operations (fetch a whole
//! collection, or fetch one document by id), so that is all the trait
//! carries. Engines layer their write surface on top as inherent methods.
//!
//! # Dyn Compatibility
//!
//! The trait uses explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` so it can be used as a trait object (`Arc<dyn CollectionRead>`),
//! letting callers swap engines without becoming generic over them.

use crate::document::{Document, DocumentError};
use crate::id::DocId;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors surfaced by a collection backend.
///
/// Reference-resolution misses are never represented here: a fetch for an
/// id that does not exist is `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation that requires the collection to exist (drop) was given
    /// a name the store has never seen.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// An insert carried an id that already exists in the collection.
    /// Id uniqueness within a collection is enforced by the store.
    #[error("duplicate id {id} in collection {collection}")]
    DuplicateId {
        /// Collection the insert targeted.
        collection: String,
        /// The offending id.
        id: DocId,
    },

    /// A document handed to the store was structurally invalid.
    #[error(transparent)]
    InvalidDocument(#[from] DocumentError),

    /// The backend itself failed (connection lost, storage fault).
    ///
    /// In-process engines never produce this; it exists so remote-backed
    /// implementations of [`CollectionRead`] have somewhere to propagate
    /// transport failures unchanged.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Boxed future returned by [`CollectionRead`] methods.
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Read access to named collections of documents.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; read models issue independent
/// fetches concurrently and may be driven from multiple tasks.
///
/// # Example
///
/// ```ignore
/// async fn count(reader: &dyn CollectionRead) -> Result<usize, StoreError> {
///     Ok(reader.fetch_all("orders").await?.len())
/// }
/// ```
pub trait CollectionRead: Send + Sync {
    /// Fetch every document in a collection, in insertion order.
    ///
    /// A collection that has never been written to is indistinguishable
    /// from an empty one: both yield `Ok(vec![])`.
    fn fetch_all<'a>(&'a self, collection: &'a str) -> FetchFuture<'a, Vec<Document>>;

    /// Fetch a single document by id, or `None` when absent.
    fn fetch_by_id<'a>(&'a self, collection: &'a str, id: &'a DocId)
    -> FetchFuture<'a, Option<Document>>;
}
