//! Route tables and the assembled application router.

mod common;
mod course;
pub use common::common_routes;
pub use course::course_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Full router: common and resource routes, JSON 404 fallback, body limit and request tracing.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(course_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
}
