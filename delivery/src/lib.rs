pub mod commands;
pub mod delivery_actors;
pub mod map_view;
pub mod messages;
pub mod zone;
