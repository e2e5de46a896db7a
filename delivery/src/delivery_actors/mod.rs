pub mod delivery_map;
pub mod map_ui;
