//! Courses API: REST backend for courses and their reviews.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Course, CourseReview, NewCourse, NewReview, Review};
pub use routes::{app_router, common_routes, course_routes};
pub use server::{build_state, Server, ServerHandle};
pub use state::AppState;
pub use store::{CourseStore, MemoryStore, PgCourseStore, PgReviewStore, ReviewStore};
