use crate::constants::{RESTAURANT_LAT, RESTAURANT_LNG};
use crate::utils::haversine_km;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS-84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Location of the restaurant.
    pub const fn restaurant() -> Self {
        Self::new(RESTAURANT_LAT, RESTAURANT_LNG)
    }

    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }

    /// GeoJSON position order: longitude first.
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lng)
    }
}
