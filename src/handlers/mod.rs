//! HTTP handlers for courses and their reviews.

pub mod course;
pub mod review;
pub use course::*;
pub use review::*;
