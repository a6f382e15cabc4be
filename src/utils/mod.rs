//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, métricas
//! y logging.

pub mod errors;
pub mod logging;
pub mod metrics;
