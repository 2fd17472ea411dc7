//! School record types.
//!
//! [`School`] is a persisted record as read back from the store. [`NewSchool`]
//! is a candidate record that has passed validation but has no id yet; it can
//! only be built through [`NewSchool::new`] or
//! [`validate_school`](crate::validate::validate_school), so every value that
//! reaches the store already satisfies the record invariants.

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// A persisted school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Identifier assigned by the store on insert.
    pub id: i64,
    /// School name (non-empty).
    pub name: String,
    /// Street address (non-empty).
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A validated school record awaiting insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewSchool {
    /// Build a record, enforcing the field invariants.
    ///
    /// Name and address must be non-empty; latitude and longitude must be
    /// finite. Coordinates are NOT range-checked: out-of-range values like
    /// latitude 200 are accepted as given.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Name);
        }
        let address = address.into();
        if address.is_empty() {
            return Err(ValidationError::Address);
        }
        if !latitude.is_finite() {
            return Err(ValidationError::Latitude);
        }
        if !longitude.is_finite() {
            return Err(ValidationError::Longitude);
        }
        Ok(Self {
            name,
            address,
            latitude,
            longitude,
        })
    }
}
