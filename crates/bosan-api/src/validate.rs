use bosan_types::api::FieldViolation;

use crate::error::ApiError;

/// Collects field violations for one request body so the 400 response can
/// list every problem at once instead of stopping at the first.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        // Same bar the registration form sets: something@something.
        if !value.contains('@') || value.trim().is_empty() {
            self.push(field, "must be a valid email address");
        }
    }

    pub fn username(&mut self, value: &str) {
        if value.len() < 3 || value.len() > 32 {
            self.push("username", "must be between 3 and 32 characters");
        }
    }

    pub fn password(&mut self, value: &str) {
        if value.len() < 8 {
            self.push("password", "must be at least 8 characters");
        }
    }

    pub fn positive(&mut self, field: &str, value: i64) {
        if value <= 0 {
            self.push(field, "must be a positive amount");
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}
