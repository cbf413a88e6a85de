//! Shared application state for all routes: one handle per store.

use crate::store::{CourseStore, MemoryStore, ReviewStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseStore>,
    pub reviews: Arc<dyn ReviewStore>,
}

impl AppState {
    pub fn new(courses: Arc<dyn CourseStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self { courses, reviews }
    }

    /// Both stores backed by one fresh in-process dataset.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            courses: store.clone(),
            reviews: store,
        }
    }
}
