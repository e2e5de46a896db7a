pub mod cart;
pub mod coordinate;
pub mod customer_info;
pub mod dtos;
pub mod geofence;
pub mod menu;
pub mod order_channel;
pub mod page;
pub mod restaurant_info;
