//! Vehicle Tracking API
//! 
//! Guarda y consulta la última posición conocida de cada vehículo de la flota.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use middleware::cors_middleware;
use state::AppState;

/// Crear el router principal de la API
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::location_routes::create_location_router())
        .fallback(routes::location_routes::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_middleware()),
        )
        .with_state(state)
}
