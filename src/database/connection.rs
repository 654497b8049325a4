//! Configuración de conexión a PostgreSQL
//! 
//! Este módulo maneja el ciclo de vida del pool: se crea al arrancar y se
//! cierra al apagar el servidor.

use anyhow::Result;
use sqlx::PgPool;
use std::future::Future;
use tracing::info;

use crate::config::DatabaseConfig;

/// Handle explícito al pool de conexiones
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool y verificar que la conexión funciona
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔗 Conectando a PostgreSQL: {}", config.display_target());
        let pool = config.create_pool().await?;
        info!("✅ PostgreSQL conectado (máx. {} conexiones)", config.max_connections);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Espera a que se devuelvan las conexiones en uso y cierra el pool
    pub async fn close(&self) {
        info!("🔌 Cerrando pool de conexiones...");
        self.pool.close().await;
    }

    /// Ejecuta `work` y cierra el pool al terminar, con éxito o con error
    pub async fn close_after<F, T>(&self, work: F) -> T
    where
        F: Future<Output = T>,
    {
        let result = work.await;
        self.close().await;
        result
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    match url[scheme_end..].rfind('@') {
        Some(at) => {
            let credentials = &url[scheme_end..scheme_end + at];
            let user = credentials.split(':').next().unwrap_or_default();
            format!("{}{}:***@{}", &url[..scheme_end], user, &url[scheme_end + at + 1..])
        }
        None => url.to_string(),
    }
}
