use std::sync::Arc;

use axum::Extension;
use book_storage::book::{Book, BookChanges, BookStore};

use crate::types::{ApiResponse, AppError, JsonBody, Message, PathParam};

const BOOK_NOT_FOUND: &str = "Book Not Found";
const NO_BOOKS_FOUND: &str = "No books found";

/// Create a book
///
/// Persists the book keyed by its `id`. An existing book with the same id is
/// overwritten.
///
/// # Returns
///
/// Returns `200 OK` with `{"message": "Book saved successfully!"}`
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - Body is not valid JSON or has no `id`
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn create_book(
    Extension(book_store): Extension<Arc<dyn BookStore>>,
    JsonBody(book): JsonBody<Book>,
) -> Result<ApiResponse<Message>, AppError> {
    let outcome = book_store.put(&book).await?;
    tracing::info!(book_id = %book.id, %outcome, "Book saved");

    Ok(ApiResponse::message("Book saved successfully!"))
}

/// Get a book by ID
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - ID is not valid percent-encoded UTF-8
/// - `404 NOT_FOUND` - Book with the given ID does not exist
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn get_book(
    PathParam(book_id): PathParam<String>,
    Extension(book_store): Extension<Arc<dyn BookStore>>,
) -> Result<ApiResponse<Book>, AppError> {
    let Some(book) = book_store.get_one(&book_id).await? else {
        return Err(AppError::not_found(BOOK_NOT_FOUND));
    };

    Ok(ApiResponse::ok(book))
}

/// List every book
///
/// Performs a full, unfiltered scan. Order is not guaranteed.
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - There are no books
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn get_all_books(
    Extension(book_store): Extension<Arc<dyn BookStore>>,
) -> Result<ApiResponse<Vec<Book>>, AppError> {
    let books = book_store.get_all().await?;

    if books.is_empty() {
        return Err(AppError::not_found(NO_BOOKS_FOUND));
    }

    Ok(ApiResponse::ok(books))
}

/// Update a book
///
/// Replaces `name`, `author`, `price` and `rating` of an existing book. The id
/// in the path wins over any id in the body.
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - Body is not valid JSON
/// - `400 BAD_REQUEST` - ID is not valid percent-encoded UTF-8
/// - `404 NOT_FOUND` - Book with the given ID does not exist
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn update_book(
    PathParam(book_id): PathParam<String>,
    Extension(book_store): Extension<Arc<dyn BookStore>>,
    JsonBody(changes): JsonBody<BookChanges>,
) -> Result<ApiResponse<Message>, AppError> {
    // Read and write are not atomic; a concurrent writer may be overwritten
    let Some(mut book) = book_store.get_one(&book_id).await? else {
        return Err(AppError::not_found(BOOK_NOT_FOUND));
    };

    book.apply(changes);
    book_store.put(&book).await?;
    tracing::info!(book_id = %book.id, "Book updated");

    Ok(ApiResponse::message("Book updated!"))
}

/// Delete a book
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - ID is not valid percent-encoded UTF-8
/// - `404 NOT_FOUND` - Book with the given ID does not exist
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn delete_book(
    PathParam(book_id): PathParam<String>,
    Extension(book_store): Extension<Arc<dyn BookStore>>,
) -> Result<ApiResponse<Message>, AppError> {
    if book_store.get_one(&book_id).await?.is_none() {
        return Err(AppError::not_found(BOOK_NOT_FOUND));
    }

    book_store.delete(&book_id).await?;
    tracing::info!(%book_id, "Book deleted");

    Ok(ApiResponse::message("Book deleted!"))
}
