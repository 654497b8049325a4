use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::LocationUpdate;

/// Tamaño de la columna `vehicle_id` (VARCHAR(255))
pub const MAX_VEHICLE_ID_LEN: u64 = 255;

/// PostgreSQL no admite NUL dentro de un texto
pub fn validate_no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("nul_character");
        error.message = Some("vehicleId must not contain NUL characters".into());
        return Err(error);
    }
    Ok(())
}

/// Un id que nunca podría haberse guardado
pub fn is_storable_vehicle_id(vehicle_id: &str) -> bool {
    !vehicle_id.is_empty()
        && vehicle_id.chars().count() as u64 <= MAX_VEHICLE_ID_LEN
        && validate_no_nul(vehicle_id).is_ok()
}

// Request para actualizar la ubicación de un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    #[validate(
        length(min = 1, max = 255, message = "vehicleId must be between 1 and 255 characters"),
        custom = "validate_no_nul"
    )]
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub speed: Option<f64>,
}

impl From<UpdateLocationRequest> for LocationUpdate {
    fn from(request: UpdateLocationRequest) -> Self {
        LocationUpdate::new(request.vehicle_id, request.latitude, request.longitude, request.speed)
    }
}

// Respuesta simple con mensaje
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
