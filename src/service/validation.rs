//! Request body parsing and field validation.

use crate::error::AppError;
use crate::model::{NewCourse, NewReview};
use serde::de::DeserializeOwned;

/// Deserialize a JSON body into its explicit request shape. Shape mismatches are client errors.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.is_empty() {
        return Err(AppError::BadRequest("request body is required".into()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))
}

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for NewCourse {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("url", &self.url)
    }
}

impl Validate for NewReview {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Parse then validate in one step.
pub fn parse_valid<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, AppError> {
    let value: T = parse_json(body)?;
    value.validate()?;
    Ok(value)
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}
