//! Shared building blocks of the Vamos Food ordering site: menu and cart
//! types, the delivery geofence, order links and the logger.

pub mod constants;
pub mod error;
pub mod links;
pub mod logger;
pub mod types;
pub mod utils;

pub use error::VamosError;

