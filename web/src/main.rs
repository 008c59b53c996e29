//! Paperbase HTTP server.
//!
//! Serves the books CRUD API and the enriched-orders report over a seeded
//! in-memory store.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin paperbase-web
//! PORT=8080 cargo run --bin paperbase-web
//! ```
//!
//! # Example Requests
//!
//! ```bash
//! # List books
//! curl http://localhost:3000/books
//!
//! # Create a book
//! curl -X POST http://localhost:3000/books \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Wings of Fire", "author": "A. P. J. Abdul Kalam"}'
//!
//! # Enriched orders report
//! curl http://localhost:3000/orders/enriched
//! ```

use paperbase_store::MemoryStore;
use paperbase_testing::fixtures;
use paperbase_web::{AppState, app_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Demo data: the library's books plus the shop dataset that feeds the
    // enriched-orders report.
    let store = MemoryStore::new();
    fixtures::seed_books(&store);
    fixtures::seed_shop(&store);
    info!(
        collections = ?store.collection_names(),
        "seeded demo collections"
    );

    let app = app_router(AppState::new(store));

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
