//! Request extractors that report failures through `AppError`.

pub mod id;
pub use id::EntityId;
