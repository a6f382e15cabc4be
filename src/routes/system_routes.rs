use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::{debug, error, info, warn};

use crate::state::AppState;
use crate::utils::errors::AppError;

pub const HOME_MESSAGE: &str = "API de veículos";

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/metrics", get(metrics))
}

/// Endpoint raíz. Deja una línea de log por nivel para verificar el archivo.
async fn home() -> &'static str {
    info!("This is an INFO message");
    debug!("This is a DEBUG message");
    warn!("This is a WARNING message");
    error!("This is an ERROR message");
    HOME_MESSAGE
}

/// Exposición de métricas para Prometheus
async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| AppError::Internal(format!("Error serializando métricas: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
