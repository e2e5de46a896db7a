use crate::constants::{EARTH_RADIUS_KM, KM_PER_DEGREE, MIN_CIRCLE_SEGMENTS};
use crate::types::coordinate::Coordinate;
use colored::Colorize;

/// Great-circle distance in kilometers between two coordinates.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let sin_dlat = (d_lat * 0.5).sin();
    let sin_dlng = (d_lng * 0.5).sin();
    let h = (sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng).clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns true iff `point` is at most `radius_km` away from `center`.
pub fn within_radius(center: Coordinate, radius_km: f64, point: Coordinate) -> bool {
    haversine_km(center, point) <= radius_km
}

/// Flat-earth distance used by the map view to decide when to re-center.
/// The longitude term is scaled by the cosine of `point`'s latitude.
pub fn planar_distance_km(origin: Coordinate, point: Coordinate) -> f64 {
    let dy = (point.lat - origin.lat) * KM_PER_DEGREE;
    let dx = (point.lng - origin.lng) * KM_PER_DEGREE * point.lat.to_radians().cos();
    (dx * dx + dy * dy).sqrt()
}

/// Point reached by travelling `distance_km` from `origin` along the initial
/// bearing `bearing_deg` (clockwise from north).
pub fn destination(origin: Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lng.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    Coordinate::new(phi2.to_degrees(), normalize_lng(lambda2.to_degrees()))
}

fn normalize_lng(lng: f64) -> f64 {
    (lng + 540.0).rem_euclid(360.0) - 180.0
}

/// Closed ring approximating the circle of `radius_km` around `center`.
/// Starts due north, runs clockwise and repeats the first vertex at the end.
pub fn circle_polygon(center: Coordinate, radius_km: f64, segments: usize) -> Vec<Coordinate> {
    let segments = segments.max(MIN_CIRCLE_SEGMENTS);
    let step = 360.0 / segments as f64;
    let mut ring: Vec<Coordinate> = (0..segments)
        .map(|i| destination(center, step * i as f64, radius_km))
        .collect();
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

/// Formats a whole amount with comma thousands separators, e.g. `1,200`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Prints the banner shown when a process starts.
pub fn print_welcome_message(title: &str, tagline: &str) {
    let width = title.chars().count().max(tagline.chars().count()) + 4;
    let border = "═".repeat(width);
    println!("{}", border.yellow());
    println!("  {}", title.bold().yellow());
    println!("  {}", tagline);
    println!("{}", border.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DELIVERY_RADIUS_KM, RESTAURANT_LAT, RESTAURANT_LNG};
    use ntest::assert_about_eq;

    fn restaurant() -> Coordinate {
        Coordinate::new(RESTAURANT_LAT, RESTAURANT_LNG)
    }

    #[test]
    fn same_point_is_inside_any_radius() {
        let center = restaurant();
        for radius in [0.0, 0.5, 3.0, 1000.0] {
            assert!(within_radius(center, radius, center));
        }
        let origin = Coordinate::new(0.0, 0.0);
        assert!(within_radius(origin, 0.0, origin));
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = restaurant();
        let b = Coordinate::new(15.3694, 44.1910);
        assert_about_eq!(haversine_km(a, b), haversine_km(b, a), 1e-9);
        let c = Coordinate::new(-33.8688, 151.2093);
        assert_about_eq!(haversine_km(a, c), haversine_km(c, a), 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert_about_eq!(haversine_km(a, b), 111.195, 0.01);
    }

    #[test]
    fn delivery_radius_boundary() {
        let center = restaurant();
        let near = destination(center, 0.0, 2.0);
        let far = destination(center, 90.0, 3.5);
        assert!(within_radius(center, DELIVERY_RADIUS_KM, near));
        assert!(!within_radius(center, DELIVERY_RADIUS_KM, far));

        // due north the distance is just the latitude delta
        let north_2km = Coordinate::new(RESTAURANT_LAT + 2.0 / 111.195, RESTAURANT_LNG);
        let north_3_5km = Coordinate::new(RESTAURANT_LAT + 3.5 / 111.195, RESTAURANT_LNG);
        assert!(within_radius(center, DELIVERY_RADIUS_KM, north_2km));
        assert!(!within_radius(center, DELIVERY_RADIUS_KM, north_3_5km));
    }

    #[test]
    fn destination_travels_requested_distance() {
        let center = restaurant();
        for bearing in [0.0, 45.0, 135.0, 270.0] {
            let point = destination(center, bearing, 3.0);
            assert_about_eq!(haversine_km(center, point), 3.0, 1e-6);
        }
    }

    #[test]
    fn circle_polygon_is_closed_and_on_radius() {
        let center = restaurant();
        let ring = circle_polygon(center, 3.0, 32);
        assert_eq!(ring.len(), 33);
        assert_eq!(ring.first(), ring.last());
        for vertex in &ring {
            assert_about_eq!(haversine_km(center, *vertex), 3.0, 0.001);
        }
        // first vertex is due north
        assert!(ring[0].lat > center.lat);
        assert_about_eq!(ring[0].lng, center.lng, 1e-9);
    }

    #[test]
    fn circle_polygon_raises_degenerate_segment_counts() {
        let ring = circle_polygon(restaurant(), 1.0, 0);
        assert_eq!(ring.len(), MIN_CIRCLE_SEGMENTS + 1);
    }

    #[test]
    fn planar_distance_matches_haversine_at_city_scale() {
        let center = restaurant();
        let point = destination(center, 60.0, 2.5);
        assert_about_eq!(planar_distance_km(center, point), 2.5, 0.05);
    }

    #[test]
    fn formats_prices_with_grouping() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(100), "100");
        assert_eq!(format_price(1200), "1,200");
        assert_eq!(format_price(14000), "14,000");
        assert_eq!(format_price(1234567), "1,234,567");
    }
}
