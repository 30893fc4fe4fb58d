//! Error types for the tuning core.
//!
//! Scoring functions themselves are total; errors only arise when raw input
//! is turned into typed values, when the preset table is loaded, or when the
//! analytics log is written.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoctorError {
    /// A precondition on an input value was violated
    #[error("Field '{field}' {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("analytics log error: {0}")]
    Analytics(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoctorError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        DoctorError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the system
    pub fn is_validation(&self) -> bool {
        matches!(self, DoctorError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = DoctorError::invalid("size", "must be >= 0.1");
        assert_eq!(err.to_string(), "Field 'size' must be >= 0.1");
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_is_not_validation() {
        let err = DoctorError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!err.is_validation());
    }
}
