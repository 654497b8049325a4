use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::Uri,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{MessageResponse, UpdateLocationRequest};
use crate::models::VehicleLocation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const WELCOME_MESSAGE: &str = "Welcome to the Vehicle Tracking API";

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/update-location", post(update_location))
        .route("/vehicle-location/:vehicle_id", get(get_vehicle_location))
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Cualquier ruta desconocida responde JSON como el resto de errores
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

async fn update_location(
    State(state): State<AppState>,
    payload: Result<Json<UpdateLocationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let controller = LocationController::new(state.store.clone());
    controller.update_location(request).await?;
    Ok(Json(MessageResponse::new("Vehicle location updated successfully")))
}

async fn get_vehicle_location(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<VehicleLocation>, AppError> {
    let controller = LocationController::new(state.store.clone());
    let location = controller.get_location(&vehicle_id).await?;
    Ok(Json(location))
}
