//! Great-circle distance and distance ranking.
//!
//! Distances use the haversine formula on a spherical Earth of radius
//! 6371 km. Inputs are decimal degrees; results are kilometers.

use serde::Serialize;

use crate::school::School;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
///
/// # Example
///
/// ```ignore
/// // One degree of longitude at the equator is ~111.19 km
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A school annotated with its distance from a reference coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchool {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the reference coordinate, in kilometers.
    pub distance: f64,
}

/// Annotate each school with its distance to `(lat, lon)` and sort the
/// collection ascending by distance.
///
/// The sort is stable: equidistant schools keep their input order.
pub fn rank_by_distance(schools: Vec<School>, lat: f64, lon: f64) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = haversine_km(lat, lon, school.latitude, school.longitude);
            RankedSchool {
                id: school.id,
                name: school.name,
                address: school.address,
                latitude: school.latitude,
                longitude: school.longitude,
                distance,
            }
        })
        .collect();

    // Finite inputs cannot produce NaN, so total_cmp matches the numeric order
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
