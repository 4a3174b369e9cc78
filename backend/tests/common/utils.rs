use axum::response::Response;
use http_body_util::BodyExt;
use uuid::Uuid;

/// Unique book id for a test
pub fn unique_book_id() -> String {
    format!("book-{}", Uuid::new_v4())
}

/// Book payload with every field populated
pub fn book_payload(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Memórias Póstumas de Brás Cubas",
        "author": "Machado de Assis",
        "price": 34.9,
        "rating": 4.8
    })
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Assert the fixed header set is present
pub fn assert_fixed_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "OPTIONS, POST, GET, PUT, DELETE"
    );
    assert_eq!(headers["content-type"], "application/json");
}
