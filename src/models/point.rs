use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from independently optional coordinates.
    /// A point only exists when BOTH coordinates are present; a half
    /// coordinate is treated the same as no location at all.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_both_coordinates() {
        assert!(GeoPoint::from_parts(Some(5.0), Some(-0.2)).is_some());
        assert!(GeoPoint::from_parts(Some(5.0), None).is_none());
        assert!(GeoPoint::from_parts(None, Some(-0.2)).is_none());
        assert!(GeoPoint::from_parts(None, None).is_none());
    }
}
