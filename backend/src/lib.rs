//! Book API backend

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// HTTP routes and handlers
pub mod routes;

/// Router assembly and server start-up
pub mod server;

/// Configuration, errors, extractors and response shaping
pub mod types;
