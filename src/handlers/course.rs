//! Course handlers: create, read, list.

use crate::error::AppError;
use crate::extractors::EntityId;
use crate::model::NewCourse;
use crate::response::{created, ok, ok_many};
use crate::service::parse_valid;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse};

/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let new_course: NewCourse = parse_valid(&body)?;
    let course = state.courses.add(new_course).await?;
    tracing::info!(course_id = course.id, "course created");
    Ok(created(&format!("/courses/{}", course.id), course))
}

/// GET /courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let course = state
        .courses
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok(ok(course))
}

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = state.courses.find_all().await?;
    Ok(ok_many(courses))
}
