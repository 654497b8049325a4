//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::repositories::{LocationRepository, LocationStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LocationStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Estado respaldado por PostgreSQL
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(LocationRepository::new(pool)))
    }
}
