pub mod system_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, track_metrics};
use crate::state::AppState;

/// Router completo de la aplicación, con métricas, trazas y CORS
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(system_routes::create_system_router())
        .merge(vehicle_routes::create_vehicle_router())
        .route_layer(from_fn_with_state(state.clone(), track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
