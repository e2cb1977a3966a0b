//! Input validation failures.

use thiserror::Error;

/// Rejected user input. The `Display` text is what API clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            ValidationError::too_short("authorName", 2).to_string(),
            "Field 'authorName' must be at least 2 characters"
        );
        assert_eq!(
            ValidationError::invalid_format("postId", "must be a positive integer").to_string(),
            "Field 'postId' has invalid format: must be a positive integer"
        );
    }

    #[test]
    fn field_accessor() {
        let err = ValidationError::invalid_format("authorEmail", "not an address");
        assert_eq!(err.field(), "authorEmail");
    }
}
