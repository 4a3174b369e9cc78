//! Book storage for the Book API
//!
//! This crate holds the `Book` model and the store implementations the HTTP
//! backend talks to: a `DynamoDB` table and an in-memory map for local runs and tests.

pub mod book;
