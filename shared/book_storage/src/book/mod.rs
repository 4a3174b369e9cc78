//! Book storage module
//!
//! [`BookStore`] is the seam the HTTP handlers depend on. [`BookStorage`] backs it
//! with a `DynamoDB` table; [`InMemoryBookStorage`] backs it with a map.

mod dynamodb;
mod error;
mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::Display;

pub use dynamodb::BookStorage;
pub use error::{BookStorageError, BookStorageResult};
pub use memory::InMemoryBookStorage;

/// A book record, keyed by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Primary key
    #[serde(default)]
    pub id: String,
    /// Title
    #[serde(default)]
    pub name: String,
    /// Author name
    #[serde(default)]
    pub author: String,
    /// Price
    #[serde(default)]
    pub price: f64,
    /// Rating
    #[serde(default)]
    pub rating: f64,
}

impl Book {
    /// Overwrites every mutable field with the given changes, keeping `id`
    pub fn apply(&mut self, changes: BookChanges) {
        self.name = changes.name;
        self.author = changes.author;
        self.price = changes.price;
        self.rating = changes.rating;
    }
}

/// Mutable fields of a book, as sent in an update request
///
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookChanges {
    /// Title
    #[serde(default)]
    pub name: String,
    /// Author name
    #[serde(default)]
    pub author: String,
    /// Price
    #[serde(default)]
    pub price: f64,
    /// Rating
    #[serde(default)]
    pub rating: f64,
}

/// `DynamoDB` attribute names for the books table
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BookAttribute {
    /// Primary key
    Id,
    /// Title
    Name,
    /// Author name
    Author,
    /// Price
    Price,
    /// Rating
    Rating,
}

/// Result of an unconditional put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PutOutcome {
    /// No book with this id existed before
    Created,
    /// An existing book with this id was overwritten
    Replaced,
}

/// Persistence operations for books
///
/// Writes are unconditional: the last writer wins.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Get a single book by id
    ///
    /// # Errors
    ///
    /// Returns `BookStorageError` if the read fails or the stored item cannot be decoded
    async fn get_one(&self, id: &str) -> BookStorageResult<Option<Book>>;

    /// Get every stored book, in no particular order
    ///
    /// # Errors
    ///
    /// Returns `BookStorageError` if the scan fails or an item cannot be decoded
    async fn get_all(&self) -> BookStorageResult<Vec<Book>>;

    /// Insert or overwrite a book keyed by its id
    ///
    /// # Errors
    ///
    /// Returns `BookStorageError::MissingId` if `book.id` is empty, or another
    /// `BookStorageError` if the write fails
    async fn put(&self, book: &Book) -> BookStorageResult<PutOutcome>;

    /// Delete a book by id. Deleting a missing id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `BookStorageError` if the delete fails
    async fn delete(&self, id: &str) -> BookStorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_book() -> Book {
        Book {
            id: "book-1".to_string(),
            name: "Dom Casmurro".to_string(),
            author: "Machado de Assis".to_string(),
            price: 39.9,
            rating: 4.5,
        }
    }

    #[test]
    fn test_book_deserializes_with_missing_fields() {
        let book: Book = serde_json::from_str(r#"{"id":"abc","name":"Only a name"}"#).unwrap();

        assert_eq!(book.id, "abc");
        assert_eq!(book.name, "Only a name");
        assert_eq!(book.author, "");
        assert_eq!(book.price, 0.0);
        assert_eq!(book.rating, 0.0);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut book = sample_book();
        let changes: BookChanges = serde_json::from_str(
            r#"{"id":"other-id","name":"Quincas Borba","author":"Machado","price":25,"rating":3}"#,
        )
        .unwrap();

        book.apply(changes);

        assert_eq!(
            book,
            Book {
                id: "book-1".to_string(),
                name: "Quincas Borba".to_string(),
                author: "Machado".to_string(),
                price: 25.0,
                rating: 3.0,
            }
        );
    }

    #[test]
    fn test_book_item_uses_attribute_names() {
        let item: std::collections::HashMap<String, aws_sdk_dynamodb::types::AttributeValue> =
            serde_dynamo::to_item(sample_book()).unwrap();

        for attribute in [
            BookAttribute::Id,
            BookAttribute::Name,
            BookAttribute::Author,
            BookAttribute::Price,
            BookAttribute::Rating,
        ] {
            assert!(
                item.contains_key(&attribute.to_string()),
                "missing attribute {attribute}"
            );
        }
        assert_eq!(item.len(), 5);
    }

    #[test]
    fn test_put_outcome_display() {
        assert_eq!(PutOutcome::Created.to_string(), "created");
        assert_eq!(PutOutcome::Replaced.to_string(), "replaced");
    }
}
