use actix::Message;
use common::VamosError;
use common::types::coordinate::Coordinate;
use common::types::dtos::MapViewDTO;
use common::types::geofence::DeliveryCheck;

/// Is this point inside the free delivery zone?
#[derive(Message, Debug, Clone)]
#[rtype(result = "DeliveryCheck")]
pub struct CheckAddress {
    pub point: Coordinate,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "MapViewDTO")]
pub struct ZoomTo {
    pub zoom: u8,
}

/// Zoom around a focus point, as a scroll-wheel zoom does.
#[derive(Message, Debug, Clone)]
#[rtype(result = "MapViewDTO")]
pub struct ZoomAt {
    pub zoom: u8,
    pub focus: Coordinate,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "MapViewDTO")]
pub struct MoveTo {
    pub center: Coordinate,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "MapViewDTO")]
pub struct GetStatus;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<String, VamosError>")]
pub struct GetZoneGeoJson;
