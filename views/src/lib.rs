//! # Paperbase Views
//!
//! Typed read models over Paperbase collections.
//!
//! The centerpiece is the **enriched-orders join view**: given the shop's
//! `orders`, `products`, and `customers` collections, [`resolve`] turns
//! each order's foreign keys into embedded `Customer` and `Product`
//! records. It is the in-process rendition of a store-side two-stage
//! lookup pipeline, reimplemented as a pure function so it is testable
//! without a database and independent of any engine's query capabilities.
//!
//! ## Shape of the view
//!
//! - one output per input order, in input order: never fewer, never
//!   reordered
//! - a dangling customer reference becomes `customer: None`
//! - dangling product references are omitted from `products` (the list may
//!   be shorter than the order's `product_ids`)
//! - dangling references are absence, never errors
//!
//! ## Example
//!
//! ```
//! use paperbase_views::{resolve, index_customers, index_products};
//! # use paperbase_views::{Customer, Order, Product};
//! # use paperbase_core::DocId;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let customer_id = DocId::generate();
//! # let product_id = DocId::generate();
//! # let customers = index_customers(vec![Customer {
//! #     id: customer_id.clone(), name: "Selvakumar".into(), email: "vselva1@gmail.com".into(),
//! # }]);
//! # let products = index_products(vec![Product {
//! #     id: product_id.clone(), name: "Laptop".into(), price: 1200,
//! # }]);
//! # let orders = vec![Order {
//! #     id: DocId::generate(), amount: 2000,
//! #     customer_id, product_ids: vec![product_id],
//! # }];
//! let enriched = resolve(orders, &products, &customers);
//! assert_eq!(enriched.len(), 1);
//! assert_eq!(enriched[0].customer.as_ref().map(|c| c.name.as_str()), Some("Selvakumar"));
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod resolver;
pub mod shop;

use paperbase_core::{DocumentError, StoreError};
use thiserror::Error;

pub use loader::{CUSTOMERS_COLLECTION, ORDERS_COLLECTION, PRODUCTS_COLLECTION, load_enriched_orders};
pub use resolver::{index_customers, index_products, resolve};
pub use shop::{Customer, EnrichedOrder, Order, Product};

/// Errors a read model can surface.
///
/// Dangling foreign keys are not represented here; they resolve to
/// absence. The only failures are structurally invalid source records and
/// backend fetch failures, which propagate unchanged.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A source document was malformed (missing or mistyped required
    /// field). Raised at the decode boundary, before resolution starts.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DocumentError),

    /// The underlying fetch failed. The resolver never catches these.
    #[error(transparent)]
    Fetch(#[from] StoreError),
}
