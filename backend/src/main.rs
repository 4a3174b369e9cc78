use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use book_api::{server, types::Environment};
use book_storage::book::{BookStorage, BookStore};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    let dynamodb_client = Arc::new(DynamoDbClient::from_conf(
        environment.dynamodb_client_config().await,
    ));
    let table_name = environment.books_table_name();
    tracing::info!(
        region = %environment.aws_region(),
        table = %table_name,
        "Using DynamoDB book storage"
    );

    let book_store: Arc<dyn BookStore> = Arc::new(BookStorage::new(dynamodb_client, table_name));

    server::start(book_store).await
}
