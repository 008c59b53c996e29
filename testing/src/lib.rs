//! # Paperbase Testing
//!
//! Seed fixtures shared by the Paperbase test suites and demo binaries.
//!
//! Three datasets mirror the shop, library, and company domains the store
//! is exercised with:
//!
//! - [`fixtures::seed_shop`]: customers, products, and orders with known
//!   cross-collection references, for join-view tests
//! - [`fixtures::seed_books`]: a small `books` collection for CRUD tests
//! - [`fixtures::seed_employees`]: an `employees` collection for
//!   filter/update tests
//!
//! Every seeded document has a stable id exposed as a constant, so tests
//! can reference records without first querying for them.
//!
//! ## Example
//!
//! ```
//! use paperbase_store::MemoryStore;
//! use paperbase_testing::fixtures;
//!
//! let store = MemoryStore::new();
//! fixtures::seed_shop(&store);
//! assert_eq!(store.len("orders"), 2);
//! ```

pub mod fixtures;
