//! CRUD handlers for the `books` collection.
//!
//! The classic library workflow: list, fetch, create, edit, delete. Books
//! are stored as schema-flexible documents and typed at the handler
//! boundary; a malformed id in the URL is rejected with 400 before the
//! store is touched.

// Axum handlers must be async even when the store operation is synchronous.
#![allow(clippy::unused_async)]

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use paperbase_core::{DocId, Document, Filter};
use serde::{Deserialize, Serialize};

/// Collection the handlers operate on.
pub const BOOKS_COLLECTION: &str = "books";

/// A book as stored, typed at the fetch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Book identifier.
    #[serde(rename = "_id")]
    pub id: DocId,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

/// Request body for creating or updating a book.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookInput {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

impl BookInput {
    /// Reject blank titles and authors before anything reaches the store.
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::bad_request("title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(AppError::bad_request("author must not be empty"));
        }
        Ok(())
    }
}

fn parse_book_id(id: &str) -> Result<DocId, AppError> {
    DocId::parse(id).map_err(|_| AppError::bad_request(format!("malformed book id: {id}")))
}

fn decode_book(doc: &Document) -> Result<Book, AppError> {
    doc.decode()
        .map_err(|e| AppError::internal("stored book is malformed").with_source(e.into()))
}

/// List all books.
///
/// # Endpoint
///
/// ```text
/// GET /books
/// ```
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    state
        .store
        .find(BOOKS_COLLECTION, &Filter::All)
        .iter()
        .map(decode_book)
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}

/// Fetch a single book by id.
///
/// # Endpoint
///
/// ```text
/// GET /books/:id
/// ```
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_book_id(&id)?;
    let doc = state
        .store
        .find_one(BOOKS_COLLECTION, &Filter::by_id(&id))
        .ok_or_else(|| AppError::not_found("Book", &id))?;
    Ok(Json(decode_book(&doc)?))
}

/// Create a new book.
///
/// # Endpoint
///
/// ```text
/// POST /books
/// Content-Type: application/json
///
/// {"title": "Wings of Fire", "author": "A. P. J. Abdul Kalam"}
/// ```
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    input.validate()?;

    let doc = Document::from_record(None, &input)
        .map_err(|e| AppError::internal("failed to build document").with_source(e.into()))?;
    let id = state.store.insert_one(BOOKS_COLLECTION, doc)?;

    tracing::info!(book = %id, title = %input.title, "book created");

    Ok((
        StatusCode::CREATED,
        Json(Book {
            id,
            title: input.title,
            author: input.author,
        }),
    ))
}

/// Update a book's title and author.
///
/// # Endpoint
///
/// ```text
/// PUT /books/:id
/// Content-Type: application/json
///
/// {"title": "Wings of Fire", "author": "Abdul Kalam"}
/// ```
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, AppError> {
    let id = parse_book_id(&id)?;
    input.validate()?;

    let replaced = state.store.replace(BOOKS_COLLECTION, &id, &input)?;
    if !replaced {
        return Err(AppError::not_found("Book", &id));
    }

    tracing::info!(book = %id, "book updated");

    Ok(Json(Book {
        id,
        title: input.title,
        author: input.author,
    }))
}

/// Delete a book.
///
/// # Endpoint
///
/// ```text
/// DELETE /books/:id
/// ```
///
/// Returns 204 on success, 404 when the book does not exist.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_book_id(&id)?;
    let deleted = state.store.delete_one(BOOKS_COLLECTION, &Filter::by_id(&id));
    if deleted == 0 {
        return Err(AppError::not_found("Book", &id));
    }

    tracing::info!(book = %id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
