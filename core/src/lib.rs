//! # Paperbase Core
//!
//! Document model and collection traits for Paperbase, a small embedded
//! document store with typed read models.
//!
//! ## Core Concepts
//!
//! - **`DocId`**: opaque 24-hex document identifier, compared but never
//!   interpreted
//! - **`Document`**: one schema-flexible JSON object in a named collection
//! - **`Filter` / `Update`**: the predicate and patch vocabulary collection
//!   operations accept
//! - **`CollectionRead`**: the read seam between read models and the engine
//!   that holds the documents
//!
//! ## Architecture Principles
//!
//! - Schema-flexible at rest, typed at the boundary: documents decode into
//!   explicit records exactly once, at fetch time, and structural
//!   violations fail there as [`DocumentError`]
//! - Absence is not failure: dangling foreign keys and empty collections
//!   are ordinary values, never errors
//! - Engines are injected: everything above the [`CollectionRead`] seam is
//!   oblivious to where documents live
//!
//! ## Example
//!
//! ```
//! use paperbase_core::{DocId, Document, Filter};
//! use serde_json::json;
//!
//! let doc = Document::from_value(None, json!({"name": "Laptop", "price": 1200}))?;
//! assert!(Filter::gte("price", 1000).matches(&doc));
//! assert!(DocId::parse(doc.id().as_str()).is_ok());
//! # Ok::<(), paperbase_core::DocumentError>(())
//! ```

pub mod collection;
pub mod document;
pub mod id;
pub mod query;

pub use collection::{CollectionRead, FetchFuture, StoreError};
pub use document::{Document, DocumentError, ID_FIELD};
pub use id::DocId;
pub use query::{Filter, Update};
