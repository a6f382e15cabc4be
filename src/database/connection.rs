//! Conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y asegura que el schema exista.

use anyhow::{Context, Result};
use sqlx::{Connection, SqliteConnection, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Sentencias idempotentes que dejan la base lista para usar
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS veiculos (
        renavam TEXT,
        placa TEXT,
        marca TEXT,
        modelo TEXT
    )"#,
    // Una placa = un registro. NULL nunca entra en conflicto.
    r#"CREATE UNIQUE INDEX IF NOT EXISTS idx_veiculos_placa ON veiculos(placa)"#,
];

/// Pool de conexiones con el schema ya aplicado
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir la base y aplicar el schema
    ///
    /// El schema se aplica en una conexión dedicada que se cierra antes de
    /// crear el pool. Toda conexión del pool abre con el schema final.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️ Abriendo base de datos: {}", config.url);

        let options = config
            .connect_options()
            .with_context(|| format!("URL de base de datos inválida '{}'", config.url))?;

        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .with_context(|| format!("no se pudo abrir la base de datos '{}'", config.url))?;
        run_migrations(&mut conn)
            .await
            .context("no se pudo aplicar el schema de veiculos")?;
        conn.close()
            .await
            .context("no se pudo cerrar la conexión de schema")?;

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("no se pudo abrir la base de datos '{}'", config.url))?;

        info!("✅ Base de datos lista");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Ejecutar el schema de la base de datos
pub async fn run_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config_in(dir: &tempfile::TempDir) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("veiculos.db").display()),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let db = DatabaseConnection::new(&config).await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();
        run_migrations(&mut conn).await.unwrap();
        drop(conn);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM veiculos")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate_plates() {
        let dir = tempfile::tempdir().unwrap();
        let db = DatabaseConnection::new(&config_in(&dir)).await.unwrap();

        let insert = "INSERT INTO veiculos (renavam, placa, marca, modelo) VALUES ('1', 'AAA0001', 'Fiat', 'Uno')";
        sqlx::query(insert).execute(db.pool()).await.unwrap();
        assert!(sqlx::query(insert).execute(db.pool()).await.is_err());
    }
}
