use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Book, BookStorageError, BookStorageResult, BookStore, PutOutcome};

/// In-memory book store
///
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookStorage {
    books: Arc<RwLock<BTreeMap<String, Book>>>,
}

impl InMemoryBookStorage {
    /// Creates a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStorage {
    async fn get_one(&self, id: &str) -> BookStorageResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(id).cloned())
    }

    async fn get_all(&self) -> BookStorageResult<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn put(&self, book: &Book) -> BookStorageResult<PutOutcome> {
        if book.id.is_empty() {
            return Err(BookStorageError::MissingId);
        }

        let mut books = self.books.write().await;
        Ok(match books.insert(book.id.clone(), book.clone()) {
            Some(_) => PutOutcome::Replaced,
            None => PutOutcome::Created,
        })
    }

    async fn delete(&self, id: &str) -> BookStorageResult<()> {
        let mut books = self.books.write().await;
        books.remove(id);
        Ok(())
    }
}
