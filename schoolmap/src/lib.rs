//! # Schoolmap - School Directory Library
//!
//! Core library for a small school directory: validated school records,
//! great-circle distance ranking, and a SQLite-backed store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use schoolmap::{rank_by_distance, NewSchool, SchoolStore};
//!
//! let store = SchoolStore::open("schools.db")?;
//!
//! // Register a school
//! let school = NewSchool::new("Springfield Elementary", "742 Evergreen Terrace", 44.05, -123.09)?;
//! let id = store.insert(&school)?;
//! println!("assigned id {}", id);
//!
//! // List all schools, nearest first
//! let ranked = rank_by_distance(store.list_all()?, 44.0, -123.0);
//! for entry in &ranked {
//!     println!("{}: {:.2} km", entry.name, entry.distance);
//! }
//! ```
//!
//! ## Data Model
//!
//! Records live in a single `schools_table` (integer id assigned on insert,
//! text name and address, floating-point latitude and longitude). The schema
//! is created on open; records are never updated or deleted.
//!
//! Coordinates are decimal degrees (WGS84). Distances are kilometers along
//! the great circle (haversine, Earth radius 6371 km). No range checking is
//! applied to coordinates: a latitude of 200 is stored as given.

pub mod distance;
pub mod error;
pub mod school;
pub mod store;
pub mod validate;

// Re-export main types at crate root for convenience
pub use distance::{haversine_km, rank_by_distance, RankedSchool, EARTH_RADIUS_KM};
pub use error::{Error, Result};
pub use school::{NewSchool, School};
pub use store::SchoolStore;
pub use validate::{validate_school, ValidationError};
