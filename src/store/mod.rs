//! Persistence for courses and reviews. Stores are plain persistence: they assign ids and filter
//! rows, they never check that a review's course exists.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgCourseStore, PgReviewStore};

use crate::error::AppError;
use crate::model::{Course, CourseReview, NewCourse, Review};
use async_trait::async_trait;

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persist a course and return it with its assigned id.
    async fn add(&self, course: NewCourse) -> Result<Course, AppError>;

    /// `Ok(None)` when no course has this id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError>;

    /// All courses ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;

    /// Cheap round-trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persist a review and return it with its assigned id. `course_id` is taken as given.
    async fn add(&self, review: CourseReview) -> Result<Review, AppError>;

    /// All reviews ordered by id.
    async fn find_all(&self) -> Result<Vec<Review>, AppError>;

    /// Reviews for one course. Empty both when the course has none and when it does not exist.
    async fn find_by_course_id(&self, course_id: i32) -> Result<Vec<Review>, AppError>;
}
