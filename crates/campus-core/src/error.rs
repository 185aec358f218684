//! Domain Errors
//!
//! Validation failures raised by form drafts and enum parsing.

use thiserror::Error;

/// Result alias for form validation
pub type FormResult<T> = Result<T, FormError>;

/// Why a submitted form was rejected before its simulated request started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// An enum wire value that is not part of its closed domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::MissingField("Title").to_string(), "Title is required");
        assert_eq!(
            FormError::InvalidRating(7).to_string(),
            "rating must be between 1 and 5, got 7"
        );
        assert_eq!(
            ParseError::new("status", "closed").to_string(),
            "unknown status: \"closed\""
        );
    }
}
