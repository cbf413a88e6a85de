//! Course and review routes. Path parameters are parsed by `EntityId`.

use crate::handlers::{create_course, create_review, get_course, list_course_reviews, list_courses, list_reviews};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/:id", get(get_course))
        .route("/courses/:id/reviews", get(list_course_reviews).post(create_review))
        .route("/reviews", get(list_reviews))
        .with_state(state)
}
