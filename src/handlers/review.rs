//! Review handlers. Every route scoped under a course checks that the course exists
//! before touching the review store, so "unknown course" (404) never looks like "no reviews" (200, []).

use crate::error::AppError;
use crate::extractors::EntityId;
use crate::model::{Course, NewReview};
use crate::response::{created, ok_many};
use crate::service::parse_valid;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse};

async fn require_course(state: &AppState, course_id: i32) -> Result<Course, AppError> {
    state
        .courses
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", course_id)))
}

/// POST /courses/:id/reviews
pub async fn create_review(
    State(state): State<AppState>,
    EntityId(course_id): EntityId,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let course = require_course(&state, course_id).await?;
    let new_review: NewReview = parse_valid(&body)?;
    let review = state.reviews.add(new_review.for_course(course.id)).await?;
    tracing::info!(review_id = review.id, course_id = course.id, "review created");
    Ok(created(&format!("/courses/{}/reviews", course.id), review))
}

/// GET /courses/:id/reviews
pub async fn list_course_reviews(
    State(state): State<AppState>,
    EntityId(course_id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let course = require_course(&state, course_id).await?;
    let reviews = state.reviews.find_by_course_id(course.id).await?;
    Ok(ok_many(reviews))
}

/// GET /reviews
pub async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = state.reviews.find_all().await?;
    Ok(ok_many(reviews))
}
