use std::{sync::Arc, time::Duration};

use axum::{body::Body, http::Request, response::Response, Router};
use book_api::server;
use book_storage::book::{BookStore, InMemoryBookStorage};
use http::Method;
use tower::ServiceExt;

/// Setup test environment
pub fn setup_test_env() {
    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to a fresh in-memory store
pub struct TestSetup {
    pub router: Router,
    pub book_store: Arc<InMemoryBookStorage>,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryBookStorage::new()))
    }

    pub fn with_store(book_store: Arc<InMemoryBookStorage>) -> Self {
        setup_test_env();

        let router = server::router(book_store.clone());

        Self { router, book_store }
    }

    /// Router wired to an arbitrary store implementation
    pub fn router_with(book_store: Arc<dyn BookStore>) -> Router {
        setup_test_env();
        server::router(book_store)
    }

    /// Router with a shortened request timeout
    pub fn router_with_timeout(book_store: Arc<dyn BookStore>, timeout: Duration) -> Router {
        setup_test_env();
        server::router_with_timeout(book_store, timeout)
    }

    pub async fn send_request(
        &self,
        method: Method,
        route: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        send(&self.router, method, route, body).await
    }

    pub async fn send_raw_request(
        &self,
        method: Method,
        route: &str,
        body: &'static str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::from(body))?;

        Ok(self.router.clone().oneshot(request).await?)
    }
}

/// Send a request through a router
pub async fn send(
    router: &Router,
    method: Method,
    route: &str,
    body: Option<serde_json::Value>,
) -> Result<Response, Box<dyn std::error::Error>> {
    let mut builder = Request::builder().uri(route).method(method);
    let body = match body {
        Some(payload) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };

    let request = builder.body(body)?;
    Ok(router.clone().oneshot(request).await?)
}
