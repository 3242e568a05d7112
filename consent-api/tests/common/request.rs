// tests/common/request.rs
use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
};
use serde_json::Value;

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::ORIGIN, "https://service-a.example")
        .body(Body::empty())
        .unwrap()
}

/// application/x-www-form-urlencoded の POST リクエストを作成
pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::ORIGIN, "https://service-a.example")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
