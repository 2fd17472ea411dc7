//! Error types for the schoolmap library.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur when working with the school directory.
///
/// The two variants keep the caller-facing split intact at the boundary:
/// [`Error::Validation`] is a client input problem with a specific reason,
/// [`Error::Storage`] carries the raw driver message from the database.
#[derive(Error, Debug)]
pub enum Error {
    /// The candidate record failed field validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The database rejected or failed an operation.
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_reason() {
        let err = Error::from(ValidationError::Name);
        assert_eq!(err.to_string(), "Invalid or missing name");

        let err = Error::from(ValidationError::Latitude);
        assert_eq!(err.to_string(), "Invalid latitude");
    }

    #[test]
    fn test_storage_error_carries_driver_text() {
        let err = Error::from(rusqlite::Error::InvalidQuery);
        assert!(!err.to_string().is_empty());
    }
}
