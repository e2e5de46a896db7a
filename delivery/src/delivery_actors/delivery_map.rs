use crate::map_view::MapView;
use crate::messages::internal_messages::*;
use crate::zone::zone_geojson;
use actix::prelude::*;
use colored::Color;
use common::VamosError;
use common::constants::ZONE_SEGMENTS;
use common::logger::Logger;
use common::types::geofence::GeofenceConfig;
use common::types::restaurant_info::RestaurantInfo;

/// The `DeliveryMap` actor backs the free delivery page: it owns the map
/// viewport and answers whether an address is inside the delivery zone.
pub struct DeliveryMap {
    /// Restaurant drawn at the center of the map.
    pub restaurant: RestaurantInfo,
    /// Current viewport, including the delivery zone.
    pub view: MapView,
    pub logger: Logger,
}

impl DeliveryMap {
    pub fn new(restaurant: RestaurantInfo, zone: GeofenceConfig) -> Self {
        Self {
            restaurant,
            view: MapView::new(zone),
            logger: Logger::new("Delivery Map", Color::Yellow),
        }
    }
}

impl Actor for DeliveryMap {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        let zone = self.view.zone();
        self.logger.debug(format!(
            "Delivery map centered on {} with a {} km zone",
            zone.center, zone.radius_km
        ));
    }
}

impl Handler<CheckAddress> for DeliveryMap {
    type Result = MessageResult<CheckAddress>;

    fn handle(&mut self, msg: CheckAddress, _ctx: &mut Self::Context) -> Self::Result {
        let check = self.view.zone().check(msg.point);
        self.logger.debug(format!(
            "{} is {:.3} km away, within: {}",
            check.point, check.distance_km, check.within
        ));
        MessageResult(check)
    }
}

impl Handler<ZoomTo> for DeliveryMap {
    type Result = MessageResult<ZoomTo>;

    fn handle(&mut self, msg: ZoomTo, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.view.zoom_to(msg.zoom))
    }
}

impl Handler<ZoomAt> for DeliveryMap {
    type Result = MessageResult<ZoomAt>;

    fn handle(&mut self, msg: ZoomAt, _ctx: &mut Self::Context) -> Self::Result {
        let status = self.view.zoom_at(msg.zoom, msg.focus);
        if status.zoom < msg.zoom {
            self.logger
                .debug(format!("Zoom {} limited to {}", msg.zoom, status.zoom));
        }
        MessageResult(status)
    }
}

impl Handler<MoveTo> for DeliveryMap {
    type Result = MessageResult<MoveTo>;

    fn handle(&mut self, msg: MoveTo, _ctx: &mut Self::Context) -> Self::Result {
        let status = self.view.move_to(msg.center);
        if status.center != msg.center {
            self.logger.debug("View drifted too far, back on the restaurant");
        }
        MessageResult(status)
    }
}

impl Handler<GetStatus> for DeliveryMap {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _msg: GetStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.view.status())
    }
}

impl Handler<GetZoneGeoJson> for DeliveryMap {
    type Result = Result<String, VamosError>;

    fn handle(&mut self, _msg: GetZoneGeoJson, _ctx: &mut Self::Context) -> Self::Result {
        zone_geojson(&self.restaurant, self.view.zone(), ZONE_SEGMENTS)
    }
}
