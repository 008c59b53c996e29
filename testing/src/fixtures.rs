//! Seed datasets with stable ids.

#![allow(clippy::unwrap_used)] // Fixture data is static and known-valid
#![allow(clippy::missing_panics_doc)] // Seeding panics only on broken fixture data

use paperbase_core::{DocId, Document};
use paperbase_store::MemoryStore;
use serde_json::{json, Value};

/// Id of the customer Selvakumar.
pub const CUSTOMER_SELVAKUMAR: &str = "67c3395ead7e2ec403b79447";
/// Id of the customer Arockia Diana.
pub const CUSTOMER_DIANA: &str = "67c3395ead7e2ec403b79448";

/// Id of the Laptop product.
pub const PRODUCT_LAPTOP: &str = "67c339f8ad7e2ec403b7944a";
/// Id of the Phone product.
pub const PRODUCT_PHONE: &str = "67c339d5ad7e2ec403b79449";
/// Id of the Headphones product.
pub const PRODUCT_HEADPHONES: &str = "67c33a01ad7e2ec403b7944b";

/// Id of the first seeded order (Selvakumar, Laptop + Phone).
pub const ORDER_FIRST: &str = "67c33a10ad7e2ec403b7944c";
/// Id of the second seeded order (Diana, Headphones + Phone).
pub const ORDER_SECOND: &str = "67c33a10ad7e2ec403b7944d";

/// Id of the first seeded book.
pub const BOOK_FIRST: &str = "67c34b01ad7e2ec403b79460";
/// Id of the second seeded book.
pub const BOOK_SECOND: &str = "67c34b01ad7e2ec403b79461";

/// Parse a fixture id constant.
#[must_use]
pub fn id(hex: &str) -> DocId {
    DocId::parse(hex).unwrap()
}

fn doc(value: Value) -> Document {
    Document::from_value(None, value).unwrap()
}

/// Seed the shop dataset: two customers, three products, and two orders
/// referencing them across collections.
pub fn seed_shop(store: &MemoryStore) {
    store
        .insert_many(
            "customers",
            vec![
                doc(json!({
                    "_id": CUSTOMER_SELVAKUMAR,
                    "name": "Selvakumar",
                    "email": "vselva1@gmail.com",
                })),
                doc(json!({
                    "_id": CUSTOMER_DIANA,
                    "name": "Arockia Diana",
                    "email": "diana@gmail.com",
                })),
            ],
        )
        .unwrap();

    store
        .insert_many(
            "products",
            vec![
                doc(json!({"_id": PRODUCT_LAPTOP, "name": "Laptop", "price": 1200})),
                doc(json!({"_id": PRODUCT_PHONE, "name": "Phone", "price": 800})),
                doc(json!({"_id": PRODUCT_HEADPHONES, "name": "Headphones", "price": 150})),
            ],
        )
        .unwrap();

    store
        .insert_many(
            "orders",
            vec![
                doc(json!({
                    "_id": ORDER_FIRST,
                    "amount": 2000,
                    "customer_id": CUSTOMER_SELVAKUMAR,
                    "product_ids": [PRODUCT_LAPTOP, PRODUCT_PHONE],
                })),
                doc(json!({
                    "_id": ORDER_SECOND,
                    "amount": 950,
                    "customer_id": CUSTOMER_DIANA,
                    "product_ids": [PRODUCT_HEADPHONES, PRODUCT_PHONE],
                })),
            ],
        )
        .unwrap();
}

/// Seed the `books` collection with two known titles.
pub fn seed_books(store: &MemoryStore) {
    store
        .insert_many(
            "books",
            vec![
                doc(json!({
                    "_id": BOOK_FIRST,
                    "title": "Wings of Fire",
                    "author": "A. P. J. Abdul Kalam",
                })),
                doc(json!({
                    "_id": BOOK_SECOND,
                    "title": "Ponniyin Selvan",
                    "author": "Kalki Krishnamurthy",
                })),
            ],
        )
        .unwrap();
}

/// Seed the `employees` collection used by filter and update tests.
pub fn seed_employees(store: &MemoryStore) {
    store
        .insert_many(
            "employees",
            vec![
                doc(json!({"name": "Selva", "age": 24, "legal_status": ""})),
                doc(json!({"name": "Narumugai", "age": 8, "legal_status": ""})),
                doc(json!({"name": "Diana", "age": 18, "legal_status": ""})),
            ],
        )
        .unwrap();
}
