//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `veiculos`. No hay primary key: la placa
//! funciona como clave natural y todas las columnas aceptan NULL.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro de la tabla veiculos, en el orden de columnas de la tabla
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub renavam: Option<String>,
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
}
