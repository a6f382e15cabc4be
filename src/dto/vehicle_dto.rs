use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Vehicle;
use crate::utils::errors::{AppError, AppResult};

// Request para insertar o actualizar un vehículo. Se acepta cualquier valor
// JSON por campo; lo que falte o sea null se guarda como NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertVehicleRequest {
    pub renavam: Option<Value>,
    pub placa: Option<Value>,
    pub marca: Option<Value>,
    pub modelo: Option<Value>,
}

impl UpsertVehicleRequest {
    /// Interpretar el body crudo. Solo se rechaza lo que no es un objeto JSON.
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("JSON inválido: {}", e)))?;

        if !value.is_object() {
            return Err(AppError::BadRequest(
                "JSON inválido: se esperaba un objeto".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("JSON inválido: {}", e)))
    }
}

// Strings tal cual, null como NULL, el resto como su texto JSON
fn as_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl From<UpsertVehicleRequest> for Vehicle {
    fn from(request: UpsertVehicleRequest) -> Self {
        Self {
            renavam: as_text(request.renavam),
            placa: as_text(request.placa),
            marca: as_text(request.marca),
            modelo: as_text(request.modelo),
        }
    }
}

// Resultado del upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

// Response de éxito: {"success": "..."}
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: message.into() }
    }
}

// Response de error: {"error": "..."}
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_string_scalars_become_text() {
        let request = UpsertVehicleRequest::from_slice(
            br#"{"renavam": 12345678901, "placa": "NUM0001", "marca": true, "modelo": null}"#,
        )
        .unwrap();

        let vehicle = Vehicle::from(request);
        assert_eq!(vehicle.renavam.as_deref(), Some("12345678901"));
        assert_eq!(vehicle.placa.as_deref(), Some("NUM0001"));
        assert_eq!(vehicle.marca.as_deref(), Some("true"));
        assert_eq!(vehicle.modelo, None);
    }

    #[test]
    fn test_missing_and_unknown_fields() {
        let request = UpsertVehicleRequest::from_slice(br#"{"placa": "X", "cor": "azul"}"#).unwrap();
        let vehicle = Vehicle::from(request);
        assert_eq!(vehicle.placa.as_deref(), Some("X"));
        assert_eq!(vehicle.renavam, None);
    }

    #[test]
    fn test_array_body_is_rejected() {
        let err = UpsertVehicleRequest::from_slice(br#"["1","ARR0001","Fiat","Uno"]"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = UpsertVehicleRequest::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
