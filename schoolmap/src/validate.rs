//! Payload validation for candidate school records.
//!
//! Incoming registration bodies are checked field by field against a dynamic
//! JSON value, so each failure reports the exact offending field rather than
//! a generic deserialization error. Checks run in a fixed order and the first
//! failure wins:
//!
//! 1. `name` missing, empty, or not a string
//! 2. `address` missing, empty, or not a string
//! 3. `latitude` missing or not a number
//! 4. `longitude` missing or not a number
//!
//! Coordinates are not range-checked; latitude 200 passes validation.

use serde_json::Value;
use thiserror::Error;

use crate::school::NewSchool;

/// Reason a candidate record was rejected.
///
/// The `Display` output is the exact reason string reported to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing name")]
    Name,

    #[error("Invalid or missing address")]
    Address,

    #[error("Invalid latitude")]
    Latitude,

    #[error("Invalid longitude")]
    Longitude,
}

/// Validate a candidate record and produce a [`NewSchool`].
///
/// # Example
///
/// ```ignore
/// let body = serde_json::json!({
///     "name": "Springfield Elementary",
///     "address": "742 Evergreen Terrace",
///     "latitude": 44.05,
///     "longitude": -123.09,
/// });
/// let school = validate_school(&body)?;
/// ```
pub fn validate_school(body: &Value) -> Result<NewSchool, ValidationError> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::Name)?;

    let address = body
        .get("address")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::Address)?;

    let latitude = body
        .get("latitude")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::Latitude)?;

    let longitude = body
        .get("longitude")
        .and_then(Value::as_f64)
        .ok_or(ValidationError::Longitude)?;

    NewSchool::new(name, address, latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_record() {
        let body = json!({
            "name": "A",
            "address": "X",
            "latitude": 12.5,
            "longitude": -7.25,
        });
        let school = validate_school(&body).unwrap();
        assert_eq!(school.name, "A");
        assert_eq!(school.address, "X");
        assert_eq!(school.latitude, 12.5);
        assert_eq!(school.longitude, -7.25);
    }

    #[test]
    fn test_accepts_integer_coordinates() {
        // JSON integers count as numbers
        let body = json!({"name": "A", "address": "X", "latitude": 0, "longitude": 1});
        let school = validate_school(&body).unwrap();
        assert_eq!(school.latitude, 0.0);
        assert_eq!(school.longitude, 1.0);
    }

    #[test]
    fn test_accepts_out_of_range_coordinates() {
        let body = json!({"name": "A", "address": "X", "latitude": 200.0, "longitude": -500.0});
        assert!(validate_school(&body).is_ok());
    }

    #[test]
    fn test_rejects_name() {
        let missing = json!({"address": "X", "latitude": 0.0, "longitude": 0.0});
        assert_eq!(validate_school(&missing).unwrap_err(), ValidationError::Name);

        let empty = json!({"name": "", "address": "X", "latitude": 0.0, "longitude": 0.0});
        assert_eq!(validate_school(&empty).unwrap_err(), ValidationError::Name);

        let wrong_type = json!({"name": 5, "address": "X", "latitude": 0.0, "longitude": 0.0});
        assert_eq!(
            validate_school(&wrong_type).unwrap_err(),
            ValidationError::Name
        );
    }

    #[test]
    fn test_rejects_address() {
        let missing = json!({"name": "A", "latitude": 0.0, "longitude": 0.0});
        assert_eq!(
            validate_school(&missing).unwrap_err(),
            ValidationError::Address
        );

        let wrong_type = json!({"name": "A", "address": [], "latitude": 0.0, "longitude": 0.0});
        assert_eq!(
            validate_school(&wrong_type).unwrap_err(),
            ValidationError::Address
        );
    }

    #[test]
    fn test_rejects_latitude() {
        let missing = json!({"name": "A", "address": "X", "longitude": 0.0});
        assert_eq!(
            validate_school(&missing).unwrap_err(),
            ValidationError::Latitude
        );

        // A numeric string is not a number
        let string = json!({"name": "A", "address": "X", "latitude": "12.5", "longitude": 0.0});
        assert_eq!(
            validate_school(&string).unwrap_err(),
            ValidationError::Latitude
        );
    }

    #[test]
    fn test_rejects_longitude() {
        let missing = json!({"name": "A", "address": "X", "latitude": 0.0});
        assert_eq!(
            validate_school(&missing).unwrap_err(),
            ValidationError::Longitude
        );

        let null = json!({"name": "A", "address": "X", "latitude": 0.0, "longitude": null});
        assert_eq!(
            validate_school(&null).unwrap_err(),
            ValidationError::Longitude
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Name is checked before address, address before coordinates
        let body = json!({"name": "", "address": 5, "latitude": "bad"});
        assert_eq!(validate_school(&body).unwrap_err(), ValidationError::Name);

        let body = json!({"name": "A", "address": "", "latitude": "bad"});
        assert_eq!(
            validate_school(&body).unwrap_err(),
            ValidationError::Address
        );
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(ValidationError::Name.to_string(), "Invalid or missing name");
        assert_eq!(
            ValidationError::Address.to_string(),
            "Invalid or missing address"
        );
        assert_eq!(ValidationError::Latitude.to_string(), "Invalid latitude");
        assert_eq!(ValidationError::Longitude.to_string(), "Invalid longitude");
    }
}
