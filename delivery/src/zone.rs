use common::VamosError;
use common::types::geofence::GeofenceConfig;
use common::types::restaurant_info::RestaurantInfo;
use common::utils::circle_polygon;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

const ZONE_COLOR: &str = "#FFD700";
const ZONE_FILL_OPACITY: f64 = 0.1;

fn properties(value: serde_json::Value) -> Option<JsonObject> {
    match value {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

fn feature(geometry: Geometry, props: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: properties(props),
        foreign_members: None,
    }
}

/// Restaurant marker plus the delivery circle, ready to be drawn on a map.
pub fn zone_feature_collection(
    restaurant: &RestaurantInfo,
    zone: &GeofenceConfig,
    segments: usize,
) -> FeatureCollection {
    let marker = feature(
        Geometry::new(Value::Point(restaurant.position.to_position())),
        json!({
            "kind": "restaurant",
            "name": format!("🍔 {}", restaurant.name),
            "popup": "المطعم الرئيسي",
        }),
    );

    let ring = circle_polygon(zone.center, zone.radius_km, segments)
        .iter()
        .map(|c| c.to_position())
        .collect();
    let circle = feature(
        Geometry::new(Value::Polygon(vec![ring])),
        json!({
            "kind": "delivery_zone",
            "name": "منطقة التوصيل المجاني",
            "popup": format!("نصف قطر {} كم", zone.radius_km),
            "radius_km": zone.radius_km,
            "color": ZONE_COLOR,
            "fill_opacity": ZONE_FILL_OPACITY,
        }),
    );

    FeatureCollection {
        bbox: None,
        features: vec![marker, circle],
        foreign_members: None,
    }
}

pub fn zone_geojson(
    restaurant: &RestaurantInfo,
    zone: &GeofenceConfig,
    segments: usize,
) -> Result<String, VamosError> {
    let collection = zone_feature_collection(restaurant, zone, segments);
    Ok(serde_json::to_string_pretty(&collection)?)
}
