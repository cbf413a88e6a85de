//! HTTP-level tests for the course endpoints.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, build_test_app, get, post_json, post_raw, seed_course};
use courses_api::{Course, CourseStore};

#[tokio::test]
async fn adding_course_returns_created_status() {
    let (app, _) = build_test_app();
    let response = post_json(app, "/courses", serde_json::json!({"name": "Test", "url": "http://test.com"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().get(header::LOCATION).is_some());
    let json = body_json(response).await;
    assert_eq!(json["name"], "Test");
    assert_eq!(json["url"], "http://test.com");
    assert!(json["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn created_courses_get_distinct_ids() {
    let (app, _) = build_test_app();
    let first = body_json(post_json(app.clone(), "/courses", serde_json::json!({"name": "A", "url": "http://a.com"})).await).await;
    let second = body_json(post_json(app, "/courses", serde_json::json!({"name": "B", "url": "http://b.com"})).await).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn course_can_be_accessed_by_id() {
    let (app, state) = build_test_app();
    let course = seed_course(&state).await;

    let response = get(app, &format!("/courses/{}", course.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let retrieved: Course = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(retrieved, course);
}

#[tokio::test]
async fn created_course_round_trips_through_http() {
    let (app, _) = build_test_app();
    let created = body_json(post_json(app.clone(), "/courses", serde_json::json!({"name": "Rust", "url": "http://rust.com"})).await).await;

    let response = get(app, &format!("/courses/{}", created["id"])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn missing_course_returns_not_found_status() {
    let (app, _) = build_test_app();
    let response = get(app, "/courses/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn non_numeric_id_returns_bad_request() {
    let (app, _) = build_test_app();
    let response = get(app, "/courses/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn malformed_course_body_returns_bad_request_and_writes_nothing() {
    let (app, state) = build_test_app();

    let response = post_raw(app.clone(), "/courses", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app.clone(), "/courses", serde_json::json!({"name": "Only name"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/courses", serde_json::json!({"name": "", "url": "http://x.com"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(state.courses.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_courses_returns_every_course() {
    let (app, state) = build_test_app();
    seed_course(&state).await;
    seed_course(&state).await;

    let response = get(app, "/courses").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let (app, _) = build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "not_found");
}

#[tokio::test]
async fn health_and_ready_report_ok() {
    let (app, _) = build_test_app();
    let response = get(app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = get(app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["database"], "ok");
}
