//! Shared helpers for the HTTP integration tests. Requests go straight to the router through
//! `tower::ServiceExt::oneshot`, no TCP listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use courses_api::{app_router, AppState, Course, CourseStore, NewCourse, NewReview, Review, ReviewStore};
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// A router over a fresh in-memory dataset, plus the state so tests can seed stores directly.
pub fn build_test_app() -> (Router, AppState) {
    let state = AppState::in_memory();
    (app_router(state.clone(), TEST_BODY_LIMIT), state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &json.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn new_test_course() -> NewCourse {
    NewCourse::new("Test", "http://what.com")
}

pub async fn seed_course(state: &AppState) -> Course {
    state.courses.add(new_test_course()).await.unwrap()
}

pub async fn seed_review(state: &AppState, course_id: i32) -> Review {
    state
        .reviews
        .add(NewReview::new(5, "Just test comment").for_course(course_id))
        .await
        .unwrap()
}
