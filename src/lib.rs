//! Vehicle Registry - API de veículos
//!
//! CRUD sobre la tabla `veiculos` (renavam, placa, marca, modelo) en SQLite,
//! con métricas Prometheus y logging a archivo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
