//! Middleware de CORS
//! 
//! La API de tracking la consumen dashboards y dispositivos desde cualquier
//! origen, así que se permite todo.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS permisivo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
