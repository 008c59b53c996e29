//! Reporting endpoints backed by read models.

use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use paperbase_views::{EnrichedOrder, load_enriched_orders};

/// The enriched-orders report: every order with its customer and product
/// references resolved into embedded records.
///
/// Dangling references surface as `customer: null` or a shortened
/// `products` list, never as an error.
///
/// # Endpoint
///
/// ```text
/// GET /orders/enriched
/// ```
///
/// # Response
///
/// ```json
/// [
///   {
///     "_id": "67c33a10ad7e2ec403b7944c",
///     "amount": 2000,
///     "customer_id": "67c3395ead7e2ec403b79447",
///     "product_ids": ["67c339f8ad7e2ec403b7944a", "67c339d5ad7e2ec403b79449"],
///     "customer": {"_id": "...", "name": "Selvakumar", "email": "vselva1@gmail.com"},
///     "products": [{"_id": "...", "name": "Laptop", "price": 1200}, ...]
///   }
/// ]
/// ```
pub async fn enriched_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedOrder>>, AppError> {
    let enriched = load_enriched_orders(&state.store).await?;
    Ok(Json(enriched))
}
