//! Geofence validation: great-circle distance between a reported position
//! and the institution reference point, checked against a fixed radius.

use crate::config::Config;
use crate::models::point::GeoPoint;

/// Mean Earth radius in meters (haversine).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dphi = (b.latitude - a.latitude).to_radians();
    let dlambda = (b.longitude - a.longitude).to_radians();

    // rounding can push h marginally past 1 for antipodal pairs, which
    // would make sqrt(1 - h) NaN
    let h = ((dphi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Fixed institution reference point plus the allowed radius.
/// Built once from the configuration and passed into the attendance
/// engine; never read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct Geofence {
    pub latitude: f64,
    pub longitude: f64,
    pub max_radius_meters: u32,
}

impl Geofence {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            latitude: cfg.institution_latitude,
            longitude: cfg.institution_longitude,
            max_radius_meters: cfg.max_radius_meters,
        }
    }

    pub fn reference(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn distance_to(&self, point: GeoPoint) -> f64 {
        haversine_distance_meters(point, self.reference())
    }

    /// Admission check. A missing position is never "inside": clock
    /// events without coordinates must be rejected.
    pub fn admits(&self, point: Option<GeoPoint>) -> bool {
        match point {
            Some(p) => self.distance_to(p) <= self.max_radius_meters as f64,
            None => false,
        }
    }
}
