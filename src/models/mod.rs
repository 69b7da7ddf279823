pub mod auth;
pub mod orders;
pub mod products;
pub mod users;
pub mod waitlist;

use serde::Serialize;

/// One failed field check, reported back in 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
