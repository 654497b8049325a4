//! Bootstrap del esquema
//! 
//! Crea la tabla `vehicle_locations` si no existe. Es idempotente y se
//! ejecuta una vez al arrancar, antes de aceptar tráfico. Varias réplicas
//! arrancando a la vez se serializan con un advisory lock de PostgreSQL.

use sqlx::PgPool;
use tracing::info;

/// Clave del advisory lock que protege el bootstrap del esquema
const SCHEMA_LOCK_KEY: i64 = 0x7665_6869_636c_6573;

const CREATE_VEHICLE_LOCATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicle_locations (
        vehicle_id VARCHAR(255) PRIMARY KEY,
        latitude DOUBLE PRECISION NOT NULL,
        longitude DOUBLE PRECISION NOT NULL,
        speed DOUBLE PRECISION NOT NULL DEFAULT 0,
        last_updated TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // CREATE TABLE IF NOT EXISTS no es seguro en paralelo sobre una base nueva
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_VEHICLE_LOCATIONS).execute(&mut *tx).await?;
    tx.commit().await?;
    info!("🗄️ Esquema verificado: tabla vehicle_locations lista");
    Ok(())
}
