use std::{sync::Arc, time::Duration};

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Extension, Router};
use book_storage::book::BookStore;
use tokio::{net::TcpListener, signal};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::routes;
use crate::types::{response::fixed_headers, AppError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the application router around the given store
pub fn router(book_store: Arc<dyn BookStore>) -> Router {
    router_with_timeout(book_store, REQUEST_TIMEOUT)
}

/// Builds the application router with a custom request timeout
///
/// The fixed response headers are applied outermost so that responses produced
/// by the timeout layer or the router itself carry them too.
pub fn router_with_timeout(book_store: Arc<dyn BookStore>, timeout: Duration) -> Router {
    let mut router = routes::handler()
        .layer(Extension(book_store))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(timeout),
        );

    for (name, value) in fixed_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    router
}

/// Turns errors from the timeout middleware into envelopes
async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(StatusCode::REQUEST_TIMEOUT, "Request timed out")
    } else {
        tracing::error!("Unhandled middleware error: {err}");
        AppError::internal()
    }
}

/// Starts the server backed by the given store
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(book_store: Arc<dyn BookStore>) -> anyhow::Result<()> {
    let router = router(book_store);

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8001), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("📚 Book API started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
