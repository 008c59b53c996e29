//! # Paperbase Store
//!
//! The in-memory document store engine for Paperbase.
//!
//! [`MemoryStore`] keeps named collections of JSON documents behind a
//! shared handle: cloning the store clones the handle, not the data, so one
//! seeded store can serve many tasks. It offers the full write surface
//! (insert, find, update, delete, drop) and implements the
//! [`CollectionRead`](paperbase_core::CollectionRead) seam that read models
//! consume.
//!
//! ## Example
//!
//! ```
//! use paperbase_store::MemoryStore;
//! use paperbase_core::{Document, Filter, Update};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//!
//! store.insert_one("employees", Document::from_value(None, json!({
//!     "name": "Selva", "age": 24
//! }))?)?;
//!
//! let modified = store.update_one(
//!     "employees",
//!     &Filter::eq("name", "Selva"),
//!     &Update::new().set("name", "Selvakumar").set("age", 25),
//! );
//! assert_eq!(modified, 1);
//! # Ok(())
//! # }
//! ```

pub mod memory;

pub use memory::MemoryStore;
