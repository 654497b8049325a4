//! Modelos de datos
//! 
//! Este módulo contiene las entidades persistidas por el servicio.

pub mod vehicle_location;

pub use vehicle_location::{LocationUpdate, VehicleLocation};
