//! In-process store backing both traits. Selected with `DATABASE_URL=memory` and used by the tests.

use super::{CourseStore, ReviewStore};
use crate::error::AppError;
use crate::model::{Course, CourseReview, NewCourse, Review};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Dataset {
    courses: Vec<Course>,
    reviews: Vec<Review>,
    last_course_id: i32,
    last_review_id: i32,
}

/// Cloning shares the same dataset.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<Dataset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Dataset> {
        // Every write completes before its guard drops, so a poisoned lock still holds a consistent dataset.
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn add(&self, course: NewCourse) -> Result<Course, AppError> {
        let mut data = self.lock();
        data.last_course_id += 1;
        let created = Course {
            id: data.last_course_id,
            name: course.name,
            url: course.url,
        };
        data.courses.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(self.lock().courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.lock().courses.clone())
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn add(&self, review: CourseReview) -> Result<Review, AppError> {
        let mut data = self.lock();
        data.last_review_id += 1;
        let created = Review {
            id: data.last_review_id,
            course_id: review.course_id,
            rating: review.rating,
            comment: review.comment,
        };
        data.reviews.push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(self.lock().reviews.clone())
    }

    async fn find_by_course_id(&self, course_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect())
    }
}
