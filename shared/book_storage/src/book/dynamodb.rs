use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_dynamo::{from_item, from_items, to_item};

use super::{Book, BookAttribute, BookStorageError, BookStorageResult, BookStore, PutOutcome};

/// Storage client for the books `DynamoDB` table
pub struct BookStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl BookStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client, shared across requests
    /// * `table_name` - `DynamoDB` table name for books
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Table this storage reads and writes
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> (String, AttributeValue) {
        (
            BookAttribute::Id.to_string(),
            AttributeValue::S(id.to_string()),
        )
    }
}

#[async_trait]
impl BookStore for BookStorage {
    async fn get_one(&self, id: &str) -> BookStorageResult<Option<Book>> {
        let (key_name, key_value) = Self::key(id);
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await?;

        response
            .item
            .map(|item| from_item(item).map_err(BookStorageError::from))
            .transpose()
    }

    async fn get_all(&self) -> BookStorageResult<Vec<Book>> {
        let mut books = Vec::new();
        let mut exclusive_start_key = None;

        // A single scan call stops at 1 MB; keep going until there is no continuation key
        loop {
            let response = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            let items = response.items.unwrap_or_default();
            books.extend(from_items::<_, Book>(items)?);

            match response.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = books.len(), "Scanned books table");

        Ok(books)
    }

    async fn put(&self, book: &Book) -> BookStorageResult<PutOutcome> {
        if book.id.is_empty() {
            return Err(BookStorageError::MissingId);
        }

        let item = to_item(book)?;

        let response = self
            .dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .return_values(ReturnValue::AllOld)
            .send()
            .await?;

        let replaced = response
            .attributes
            .is_some_and(|previous| !previous.is_empty());

        Ok(if replaced {
            PutOutcome::Replaced
        } else {
            PutOutcome::Created
        })
    }

    async fn delete(&self, id: &str) -> BookStorageResult<()> {
        let (key_name, key_value) = Self::key(id);
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await?;

        Ok(())
    }
}
