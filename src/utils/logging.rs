//! Configuración de logging
//!
//! Stdout (con colores solo en desarrollo) y un archivo de log sin colores,
//! ambos filtrados por `RUST_LOG`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EnvironmentConfig;

pub const DEFAULT_LOG_FILTER: &str = "vehicle_registry=debug,tower_http=debug,sqlx=warn,info";

pub fn init_tracing(config: &EnvironmentConfig) -> Result<()> {
    let log_file = config.log_file.as_path();
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("no se pudo crear el directorio {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("no se pudo abrir el archivo de log {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(config.is_development()))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("no se pudo inicializar el logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lines_reach_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnvironmentConfig {
            environment: "production".to_string(),
            log_file: dir.path().join("logs").join("app.log"),
            ..EnvironmentConfig::default()
        };

        init_tracing(&config).unwrap();
        tracing::warn!("linea de prueba");

        let contents = fs::read_to_string(&config.log_file).unwrap();
        assert!(contents.contains("WARN"));
        assert!(contents.contains("linea de prueba"));
        assert!(!contents.contains('\u{1b}'));
    }
}
