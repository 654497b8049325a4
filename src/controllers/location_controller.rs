use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::dto::location_dto::{is_storable_vehicle_id, UpdateLocationRequest};
use crate::models::{LocationUpdate, VehicleLocation};
use crate::repositories::LocationStore;
use crate::utils::errors::{AppError, AppResult, FETCH_LOCATION_FAILED, UPDATE_LOCATION_FAILED};

pub struct LocationController {
    store: Arc<dyn LocationStore>,
}

impl LocationController {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    pub async fn update_location(&self, request: UpdateLocationRequest) -> AppResult<VehicleLocation> {
        request.validate()?;

        let update = LocationUpdate::from(request);
        let location = self
            .store
            .upsert_location(&update)
            .await
            .map_err(AppError::database(UPDATE_LOCATION_FAILED))?;

        info!(
            "📍 Ubicación actualizada: {} ({}, {}) a {} km/h",
            location.vehicle_id, location.latitude, location.longitude, location.speed
        );
        Ok(location)
    }

    pub async fn get_location(&self, vehicle_id: &str) -> AppResult<VehicleLocation> {
        if !is_storable_vehicle_id(vehicle_id) {
            debug!("🔍 Id de vehículo imposible, no se consulta la base: {:?}", vehicle_id);
            return Err(AppError::NotFound);
        }

        let location = self
            .store
            .get_location(vehicle_id)
            .await
            .map_err(AppError::database(FETCH_LOCATION_FAILED))?;

        match location {
            Some(location) => Ok(location),
            None => {
                debug!("🔍 Vehículo sin ubicación registrada: {}", vehicle_id);
                Err(AppError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Guarda lo último que recibió; `fail` simula una caída de la base de datos
    #[derive(Default)]
    struct RecordingStore {
        last: Mutex<Option<LocationUpdate>>,
        fail: bool,
    }

    #[async_trait]
    impl LocationStore for RecordingStore {
        async fn upsert_location(&self, update: &LocationUpdate) -> Result<VehicleLocation, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            *self.last.lock().unwrap() = Some(update.clone());
            Ok(VehicleLocation {
                vehicle_id: update.vehicle_id.clone(),
                latitude: update.latitude,
                longitude: update.longitude,
                speed: update.speed,
                last_updated: Utc::now(),
            })
        }

        async fn get_location(&self, _vehicle_id: &str) -> Result<Option<VehicleLocation>, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            Ok(None)
        }
    }

    fn request(vehicle_id: &str, speed: Option<f64>) -> UpdateLocationRequest {
        UpdateLocationRequest {
            vehicle_id: vehicle_id.to_string(),
            latitude: 48.85,
            longitude: 2.35,
            speed,
        }
    }

    #[tokio::test]
    async fn test_update_passes_default_speed_to_store() {
        let store = Arc::new(RecordingStore::default());
        let controller = LocationController::new(store.clone());

        let location = controller.update_location(request("V1", None)).await.unwrap();
        assert_eq!(location.speed, 0.0);

        let stored = store.last.lock().unwrap().clone().unwrap();
        assert_eq!(stored, LocationUpdate::new("V1", 48.85, 2.35, Some(0.0)));
    }

    #[tokio::test]
    async fn test_empty_vehicle_id_never_reaches_store() {
        let store = Arc::new(RecordingStore::default());
        let controller = LocationController::new(store.clone());

        let err = controller.update_location(request("", Some(3.0))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert!(store.last.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_vehicle_is_not_found() {
        let controller = LocationController::new(Arc::new(RecordingStore::default()));
        let err = controller.get_location("UNKNOWN").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_unstorable_ids_are_not_found_without_store() {
        // un store caído demuestra que la consulta no llega a la base
        let controller = LocationController::new(Arc::new(RecordingStore {
            fail: true,
            ..Default::default()
        }));

        for vehicle_id in ["a\u{0}b".to_string(), "v".repeat(300)] {
            let err = controller.get_location(&vehicle_id).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound));
        }
    }

    #[tokio::test]
    async fn test_store_failures_keep_operation_message() {
        let controller = LocationController::new(Arc::new(RecordingStore {
            fail: true,
            ..Default::default()
        }));

        match controller.update_location(request("V1", None)).await {
            Err(AppError::Database { message, .. }) => assert_eq!(message, UPDATE_LOCATION_FAILED),
            other => panic!("unexpected result: {:?}", other),
        }
        match controller.get_location("V1").await {
            Err(AppError::Database { message, .. }) => assert_eq!(message, FETCH_LOCATION_FAILED),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
