//! Course and review entities plus the request bodies that create them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub url: String,
}

/// Body of `POST /courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCourse {
    pub name: String,
    pub url: String,
}

impl NewCourse {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub course_id: i32,
    pub rating: i32,
    pub comment: String,
}

/// Body of `POST /courses/:id/reviews`. The course id comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewReview {
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    pub fn new(rating: i32, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }

    /// Bind this body to its owning course.
    pub fn for_course(self, course_id: i32) -> CourseReview {
        CourseReview {
            course_id,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

/// A review ready to be persisted: body plus the owning course id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReview {
    pub course_id: i32,
    pub rating: i32,
    pub comment: String,
}
