use crate::constants::*;
use crate::types::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub address: String,
    pub working_hours: String,
    pub position: Coordinate,
    /// International number without `+`, used for every order link.
    pub phone: String,
    pub email: String,
    pub maps_url: String,
    pub instagram_url: String,
    pub facebook_url: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: RESTAURANT_NAME.to_string(),
            title: RESTAURANT_TITLE.to_string(),
            tagline: RESTAURANT_TAGLINE.to_string(),
            address: RESTAURANT_ADDRESS.to_string(),
            working_hours: WORKING_HOURS.to_string(),
            position: Coordinate::restaurant(),
            phone: ORDER_PHONE.to_string(),
            email: RESTAURANT_EMAIL.to_string(),
            maps_url: MAPS_URL.to_string(),
            instagram_url: INSTAGRAM_URL.to_string(),
            facebook_url: FACEBOOK_URL.to_string(),
        }
    }
}
