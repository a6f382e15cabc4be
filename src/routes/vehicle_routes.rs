use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{SuccessResponse, UpsertOutcome, UpsertVehicleRequest};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/veiculos", get(list_vehicles))
        .route("/veiculo", post(upsert_vehicle))
        .route("/veiculo/:placa", get(get_vehicle).delete(delete_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_placa(&placa).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(&placa).await?;
    Ok(Json(response))
}

// El body se interpreta como JSON sin mirar el Content-Type
async fn upsert_vehicle(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    let request = UpsertVehicleRequest::from_slice(&body)?;

    let controller = VehicleController::new(state.pool.clone());
    let (outcome, response) = controller.upsert(request).await?;

    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(response)))
}
