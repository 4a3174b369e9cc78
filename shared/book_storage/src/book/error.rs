//! Error types for book storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, get_item::GetItemError, put_item::PutItemError, scan::ScanError,
};
use thiserror::Error;

/// Result type alias for storage operations
pub type BookStorageResult<T> = Result<T, BookStorageError>;

/// Storage error types for book operations
#[derive(Debug, Error)]
pub enum BookStorageError {
    /// Failed to put book into `DynamoDB`
    #[error("Failed to put book into DynamoDB: {0:?}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to get book from `DynamoDB`
    #[error("Failed to get book from DynamoDB: {0:?}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to scan books from `DynamoDB`
    #[error("Failed to scan books from DynamoDB: {0:?}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to delete book from `DynamoDB`
    #[error("Failed to delete book from DynamoDB: {0:?}")]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// Book has no primary key
    #[error("Book id must not be empty")]
    MissingId,

    /// Failed to convert between a book and a `DynamoDB` item
    #[error("Failed to parse book: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for BookStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
