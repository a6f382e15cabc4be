//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool SQLite con SQLx.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::environment::EnvironmentConfig;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.database_max_connections.max(1),
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Opciones de conexión; el archivo de la base se crea si no existe
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        Ok(SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true))
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = self.connect_options()?;

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_is_never_zero() {
        let env = EnvironmentConfig {
            database_max_connections: 0,
            ..EnvironmentConfig::default()
        };
        let config = DatabaseConfig::from_environment(&env);
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.url, "sqlite://veiculos.db");
    }
}
