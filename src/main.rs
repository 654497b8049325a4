use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_tracking::build_router;
use vehicle_tracking::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_tracking::database::{run_migrations, DatabaseConnection};
use vehicle_tracking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("🚚 Vehicle Tracking API");
    info!("=======================");

    let env_config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    // Se cierra el pool en todos los caminos, también si falla el arranque
    let result = db_connection
        .close_after(serve(&env_config, &db_connection))
        .await;

    match result {
        Ok(()) => {
            info!("👋 Servidor terminado");
            Ok(())
        }
        Err(e) => {
            error!("❌ Servidor terminó con error: {:#}", e);
            Err(e)
        }
    }
}

/// Bootstrap del esquema y servidor HTTP hasta la señal de apagado
async fn serve(env_config: &EnvironmentConfig, db_connection: &DatabaseConnection) -> Result<()> {
    // El esquema debe existir antes de aceptar tráfico
    run_migrations(db_connection.pool())
        .await
        .context("Error inicializando el esquema")?;

    let app = build_router(AppState::from_pool(db_connection.pool().clone()));

    let listener = tokio::net::TcpListener::bind((env_config.host.as_str(), env_config.port))
        .await
        .with_context(|| format!("No se pudo escuchar en {}", env_config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", env_config.server_url());
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Bienvenida");
    info!("   POST /update-location - Actualizar ubicación de un vehículo");
    info!("   GET  /vehicle-location/:vehicleId - Última ubicación de un vehículo");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error del servidor HTTP")?;
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
