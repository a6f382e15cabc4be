use sqlx::SqlitePool;
use tracing::info;

use crate::dto::vehicle_dto::{SuccessResponse, UpsertOutcome, UpsertVehicleRequest};
use crate::models::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};

pub const NOT_FOUND_MESSAGE: &str = "Veículo não encontrado";
pub const DELETED_MESSAGE: &str = "Veículo deletado com sucesso";
pub const UPDATED_MESSAGE: &str = "Veículo atualizado com sucesso";
pub const CREATED_MESSAGE: &str = "Veículo inserido com sucesso";

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        info!("🚗 /veiculos GET - {} vehículos", vehicles.len());
        Ok(vehicles)
    }

    pub async fn get_by_placa(&self, placa: &str) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_by_placa(placa).await?;

        if vehicles.is_empty() {
            info!("🔍 /veiculo/{} GET - Vehículo no encontrado", placa);
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!("✅ /veiculo/{} GET - Vehículo encontrado", placa);
        Ok(vehicles)
    }

    pub async fn delete(&self, placa: &str) -> AppResult<SuccessResponse> {
        let deleted = self.repository.delete_by_placa(placa).await?;

        if deleted == 0 {
            info!("🔍 /veiculo/{} DELETE - Vehículo no encontrado", placa);
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!("🗑️ /veiculo/{} DELETE - Vehículo encontrado y eliminado", placa);
        Ok(SuccessResponse::new(DELETED_MESSAGE))
    }

    pub async fn upsert(
        &self,
        request: UpsertVehicleRequest,
    ) -> AppResult<(UpsertOutcome, SuccessResponse)> {
        let vehicle = Vehicle::from(request);
        let outcome = self.repository.upsert(&vehicle).await?;
        let placa = vehicle.placa.as_deref().unwrap_or("<null>");

        let message = match outcome {
            UpsertOutcome::Created => {
                info!("🆕 /veiculo POST - Vehículo {} no encontrado e insertado", placa);
                CREATED_MESSAGE
            }
            UpsertOutcome::Updated => {
                info!("✏️ /veiculo POST - Vehículo {} encontrado y actualizado", placa);
                UPDATED_MESSAGE
            }
        };

        Ok((outcome, SuccessResponse::new(message)))
    }
}
