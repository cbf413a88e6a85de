//! Request parsing and validation shared by the handlers.

mod validation;
pub use validation::{parse_json, parse_valid, Validate};
