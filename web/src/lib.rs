//! Axum JSON CRUD service over Paperbase collections.
//!
//! The service exposes the library's `books` collection for create, read,
//! update, and delete, plus a reporting endpoint that serves the
//! enriched-orders join view.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (path id, JSON body)
//! 3. **Validate at the boundary** (id shape, required fields)
//! 4. **Run the store operation** through the shared [`AppState`] handle
//! 5. **Map the result** to an HTTP response or an [`AppError`]
//!
//! # Example
//!
//! ```ignore
//! use paperbase_store::MemoryStore;
//! use paperbase_web::{AppState, app_router};
//!
//! let state = AppState::new(MemoryStore::new());
//! let app = app_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use router::app_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
