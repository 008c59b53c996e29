//! Application HTTP router.
//!
//! Composes the books CRUD handlers and the reporting endpoint into a
//! single Axum router.

use crate::handlers::{books, health, reports};
use crate::state::AppState;
use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

/// Create the application router with all endpoints.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `GET /books` - List all books
/// - `POST /books` - Create a book
/// - `GET /books/:id` - Fetch a book
/// - `PUT /books/:id` - Update a book
/// - `DELETE /books/:id` - Delete a book
/// - `GET /orders/enriched` - Enriched-orders report
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(MemoryStore::new());
/// let app = app_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/orders/enriched", get(reports::enriched_orders))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
