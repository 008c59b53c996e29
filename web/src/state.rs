//! Application state for Axum handlers.

use paperbase_store::MemoryStore;

/// Application state shared across all HTTP handlers.
///
/// Carries the store handle explicitly instead of a process-wide
/// connection singleton; handlers receive it through Axum's `State`
/// extractor and the handle is released with the router.
///
/// # Examples
///
/// ```ignore
/// use axum::extract::State;
///
/// async fn handler(State(state): State<AppState>) -> Json<Vec<BookDto>> {
///     let books = state.store.find("books", &Filter::All);
///     // ...
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The document store backing all collections.
    pub store: MemoryStore,
}

impl AppState {
    /// Create application state over a store handle.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        // Ensure AppState implements Clone (required for Axum)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(MemoryStore::new());
        let clone = state.clone();
        paperbase_testing::fixtures::seed_books(&clone.store);
        assert_eq!(state.store.len("books"), 2);
    }
}
