//! Response helpers. Entities are returned bare (no envelope) so clients can map them directly.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::Serialize;

/// 201 with the created entity and a `Location` header pointing at it.
pub fn created<T: Serialize>(location: &str, data: T) -> (StatusCode, HeaderMap, Json<T>) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(location) {
        headers.insert(header::LOCATION, value);
    }
    (StatusCode::CREATED, headers, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
