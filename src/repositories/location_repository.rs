use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{LocationUpdate, VehicleLocation};

/// Almacén de la última ubicación conocida por vehículo
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Crea o sobrescribe el registro de `update.vehicle_id` en una sola sentencia.
    async fn upsert_location(&self, update: &LocationUpdate) -> Result<VehicleLocation, sqlx::Error>;

    /// `Ok(None)` cuando el vehículo nunca ha enviado una ubicación.
    async fn get_location(&self, vehicle_id: &str) -> Result<Option<VehicleLocation>, sqlx::Error>;
}

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for LocationRepository {
    async fn upsert_location(&self, update: &LocationUpdate) -> Result<VehicleLocation, sqlx::Error> {
        // GREATEST mantiene last_updated no decreciente aunque el reloj del servidor retroceda
        sqlx::query_as::<_, VehicleLocation>(
            r#"
            INSERT INTO vehicle_locations (vehicle_id, latitude, longitude, speed, last_updated)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (vehicle_id) DO UPDATE SET
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                speed = EXCLUDED.speed,
                last_updated = GREATEST(vehicle_locations.last_updated, EXCLUDED.last_updated)
            RETURNING vehicle_id, latitude, longitude, speed, last_updated
            "#,
        )
        .bind(&update.vehicle_id)
        .bind(update.latitude)
        .bind(update.longitude)
        .bind(update.speed)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_location(&self, vehicle_id: &str) -> Result<Option<VehicleLocation>, sqlx::Error> {
        sqlx::query_as::<_, VehicleLocation>(
            "SELECT vehicle_id, latitude, longitude, speed, last_updated FROM vehicle_locations WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await
    }
}
