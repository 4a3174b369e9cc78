pub mod books;
mod health;

use axum::{http::StatusCode, routing::get, Router};

use crate::types::{ApiResponse, AppError, Message};

/// Creates the router with all handler routes
pub fn handler() -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route(
            "/books",
            get(books::get_all_books)
                .post(books::create_book)
                .options(preflight),
        )
        .route(
            "/books/{book_id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .options(preflight),
        )
        // Must come after the routes it applies to
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// CORS preflight; the allow headers are added with the fixed header set
async fn preflight() -> ApiResponse<Message> {
    ApiResponse::message("OK")
}

async fn method_not_allowed() -> AppError {
    AppError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}
