//! Extract an integer entity id from the single path parameter of a route.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer id from `/courses/:id` or `/courses/:id/reviews`.
/// A value that is not an `i32` is rejected with 400 Bad Request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i32>()
            .map(EntityId)
            .map_err(|_| AppError::BadRequest(format!("invalid id: '{}'", raw)))
    }
}
