//! Sistema de manejo de errores
//! 
//! Este módulo define los errores de la API y su conversión a respuestas
//! HTTP. Todo fallo termina como JSON con un campo `message`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found";
pub const UPDATE_LOCATION_FAILED: &str = "Error updating vehicle location";
pub const FETCH_LOCATION_FAILED: &str = "Error fetching vehicle data";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INVALID_LOCATION_PAYLOAD: &str = "Invalid vehicle location payload";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Vehicle not found")]
    NotFound,

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("{message}: {detail}")]
    BadRequest { message: &'static str, detail: String },
}

impl AppError {
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: INVALID_LOCATION_PAYLOAD,
            detail: rejection.body_text(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest {
            message: INVALID_LOCATION_PAYLOAD,
            detail: errors.to_string(),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database { message, source } => {
                error!("❌ {}: {}", message, source);
                ErrorResponse {
                    message: message.to_string(),
                    error: Some(source.to_string()),
                }
            }
            AppError::NotFound => ErrorResponse {
                message: VEHICLE_NOT_FOUND.to_string(),
                error: None,
            },
            AppError::RouteNotFound(path) => {
                debug!("🔍 Ruta inexistente: {}", path);
                ErrorResponse {
                    message: ROUTE_NOT_FOUND.to_string(),
                    error: None,
                }
            }
            AppError::BadRequest { message, detail } => {
                warn!("⚠️ Petición inválida: {}", detail);
                ErrorResponse {
                    message: message.to_string(),
                    error: Some(detail),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_has_only_message() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "Vehicle not found" }));
    }

    #[tokio::test]
    async fn test_database_error_includes_detail() {
        let err = AppError::database(FETCH_LOCATION_FAILED)(sqlx::Error::PoolTimedOut);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], FETCH_LOCATION_FAILED);
        assert!(body["error"].as_str().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let err = AppError::BadRequest {
            message: INVALID_LOCATION_PAYLOAD,
            detail: "missing field `latitude`".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], INVALID_LOCATION_PAYLOAD);
        assert_eq!(body["error"], "missing field `latitude`");
    }
}
