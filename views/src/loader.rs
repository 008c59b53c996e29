//! Loading the enriched-orders view from a collection backend.
//!
//! The three source fetches are independent, so they are issued
//! concurrently; resolution only starts once all three have completed,
//! so the view is never built over partial data. Fetch failures propagate
//! unchanged, and decode failures surface before any resolution happens.

use crate::resolver::{index_customers, index_products, resolve};
use crate::shop::{Customer, EnrichedOrder, Order, Product};
use crate::ViewError;
use paperbase_core::CollectionRead;

/// Collection holding order documents.
pub const ORDERS_COLLECTION: &str = "orders";
/// Collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";
/// Collection holding customer documents.
pub const CUSTOMERS_COLLECTION: &str = "customers";

/// Fetch the shop collections and resolve the join view.
///
/// # Errors
///
/// - [`ViewError::Fetch`] when any of the three fetches fails; nothing is
///   resolved in that case.
/// - [`ViewError::InvalidInput`] when a fetched document is structurally
///   malformed (missing required field, bad id). Dangling references are
///   not errors and never surface here.
pub async fn load_enriched_orders(
    reader: &dyn CollectionRead,
) -> Result<Vec<EnrichedOrder>, ViewError> {
    let (order_docs, product_docs, customer_docs) = tokio::try_join!(
        reader.fetch_all(ORDERS_COLLECTION),
        reader.fetch_all(PRODUCTS_COLLECTION),
        reader.fetch_all(CUSTOMERS_COLLECTION),
    )?;

    let orders = order_docs
        .iter()
        .map(Order::from_document)
        .collect::<Result<Vec<_>, _>>()?;
    let products = product_docs
        .iter()
        .map(Product::from_document)
        .collect::<Result<Vec<_>, _>>()?;
    let customers = customer_docs
        .iter()
        .map(Customer::from_document)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        orders = orders.len(),
        products = products.len(),
        customers = customers.len(),
        "resolving enriched orders"
    );

    Ok(resolve(orders, &index_products(products), &index_customers(customers)))
}
