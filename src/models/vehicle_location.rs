//! Modelo de VehicleLocation
//! 
//! Última posición conocida de un vehículo. Mapea exactamente a la tabla
//! `vehicle_locations` (primary key `vehicle_id`) y se serializa en camelCase
//! para la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro de ubicación - una fila por vehículo, "last write wins"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLocation {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub last_updated: DateTime<Utc>,
}

/// Datos de escritura para el upsert; `last_updated` lo asigna el servidor
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUpdate {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
}

impl LocationUpdate {
    pub fn new(vehicle_id: impl Into<String>, latitude: f64, longitude: f64, speed: Option<f64>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            latitude,
            longitude,
            speed: speed.unwrap_or(0.0),
        }
    }
}
