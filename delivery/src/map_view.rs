use common::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, RECENTER_DISTANCE_KM};
use common::types::coordinate::Coordinate;
use common::types::dtos::MapViewDTO;
use common::types::geofence::GeofenceConfig;
use common::utils::planar_distance_km;

/// Viewport of the delivery map. The view is kept close to the restaurant:
/// deep zoom is only allowed inside the delivery zone and the center snaps
/// back once it drifts too far.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    zone: GeofenceConfig,
    center: Coordinate,
    zoom: u8,
}

impl MapView {
    pub fn new(zone: GeofenceConfig) -> Self {
        Self {
            zone,
            center: zone.center,
            zoom: DEFAULT_ZOOM,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zone(&self) -> &GeofenceConfig {
        &self.zone
    }

    pub fn status(&self) -> MapViewDTO {
        MapViewDTO {
            center: self.center,
            zoom: self.zoom,
            center_in_zone: self.zone.contains(self.center),
        }
    }

    /// Zooms keeping the current center.
    pub fn zoom_to(&mut self, zoom: u8) -> MapViewDTO {
        self.zoom_at(zoom, self.center)
    }

    /// Zooms around `focus`, which becomes the new center before the
    /// zoom limits and the re-centering rule are applied.
    pub fn zoom_at(&mut self, zoom: u8, focus: Coordinate) -> MapViewDTO {
        self.center = focus;
        let mut zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom > DEFAULT_ZOOM && !self.zone.contains(self.center) {
            zoom = DEFAULT_ZOOM;
        }
        self.zoom = zoom;
        self.settle();
        self.status()
    }

    /// Pans to `center`; the zoom is kept.
    pub fn move_to(&mut self, center: Coordinate) -> MapViewDTO {
        self.center = center;
        self.settle();
        self.status()
    }

    fn settle(&mut self) {
        if planar_distance_km(self.zone.center, self.center) > RECENTER_DISTANCE_KM {
            self.center = self.zone.center;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::utils::destination;

    fn view() -> MapView {
        MapView::new(GeofenceConfig::default())
    }

    #[test]
    fn starts_on_the_restaurant() {
        let view = view();
        assert_eq!(view.center(), Coordinate::restaurant());
        assert_eq!(view.zoom(), DEFAULT_ZOOM);
        assert!(view.status().center_in_zone);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = view();
        assert_eq!(view.zoom_to(20).zoom, MAX_ZOOM);
        assert_eq!(view.zoom_to(2).zoom, MIN_ZOOM);
        assert_eq!(view.zoom_to(16).zoom, 16);
    }

    #[test]
    fn deep_zoom_outside_the_zone_is_limited() {
        let mut view = view();
        let outside = destination(Coordinate::restaurant(), 45.0, 4.0);
        let status = view.zoom_at(17, outside);
        assert_eq!(status.zoom, DEFAULT_ZOOM);
        // 4 km is also beyond the re-centering distance
        assert_eq!(status.center, Coordinate::restaurant());

        let inside = destination(Coordinate::restaurant(), 45.0, 1.0);
        let status = view.zoom_at(17, inside);
        assert_eq!(status.zoom, 17);
        assert_eq!(status.center, inside);
    }

    #[test]
    fn moves_beyond_two_km_snap_back() {
        let mut view = view();
        view.zoom_to(16);
        let near = destination(Coordinate::restaurant(), 300.0, 1.5);
        assert_eq!(view.move_to(near).center, near);

        let far = destination(Coordinate::restaurant(), 120.0, 2.5);
        let status = view.move_to(far);
        assert_eq!(status.center, Coordinate::restaurant());
        assert_eq!(status.zoom, 16);
    }
}
