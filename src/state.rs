//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::utils::metrics::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig, metrics: HttpMetrics) -> Self {
        Self {
            pool,
            config,
            metrics: Arc::new(metrics),
        }
    }
}
