use crate::constants::DELIVERY_RADIUS_KM;
use crate::types::coordinate::Coordinate;
use crate::utils::{haversine_km, within_radius};
use serde::{Deserialize, Serialize};

/// A circular perimeter around a center point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    pub center: Coordinate,
    pub radius_km: f64,
}

/// Outcome of checking a single point against a geofence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCheck {
    pub point: Coordinate,
    pub distance_km: f64,
    pub within: bool,
}

impl GeofenceConfig {
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        within_radius(self.center, self.radius_km, point)
    }

    pub fn check(&self, point: Coordinate) -> DeliveryCheck {
        let distance_km = haversine_km(self.center, point);
        DeliveryCheck {
            point,
            distance_km,
            within: distance_km <= self.radius_km,
        }
    }
}

impl Default for GeofenceConfig {
    /// Free-delivery zone: 3 km around the restaurant.
    fn default() -> Self {
        Self::new(Coordinate::restaurant(), DELIVERY_RADIUS_KM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::destination;
    use ntest::assert_about_eq;

    #[test]
    fn default_zone_is_three_km_around_restaurant() {
        let zone = GeofenceConfig::default();
        assert_eq!(zone.center, Coordinate::restaurant());
        assert_about_eq!(zone.radius_km, 3.0);
        assert!(zone.contains(zone.center));
    }

    #[test]
    fn check_reports_distance_and_verdict() {
        let zone = GeofenceConfig::default();
        let inside = zone.check(destination(zone.center, 200.0, 2.0));
        assert!(inside.within);
        assert_about_eq!(inside.distance_km, 2.0, 1e-6);

        let outside = zone.check(destination(zone.center, 10.0, 3.5));
        assert!(!outside.within);
        assert_about_eq!(outside.distance_km, 3.5, 1e-6);
    }
}
