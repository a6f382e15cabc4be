use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicle_registry::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_registry::database::DatabaseConnection;
use vehicle_registry::routes::create_app;
use vehicle_registry::state::AppState;
use vehicle_registry::utils::logging::init_tracing;
use vehicle_registry::utils::metrics::HttpMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    init_tracing(&config)?;

    info!("🚗 Vehicle Registry - API de veículos");
    info!("======================================");
    info!("⚙️ Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from_environment(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let metrics = HttpMetrics::new().context("no se pudieron registrar las métricas")?;
    let app_state = AppState::new(db_connection.pool().clone(), config.clone(), metrics);
    let app = create_app(app_state);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Endpoint de prueba");
    info!("   GET    /metrics - Métricas Prometheus");
    info!("   GET    /veiculos - Listar vehículos");
    info!("   GET    /veiculo/:placa - Obtener vehículo por placa");
    info!("   DELETE /veiculo/:placa - Eliminar vehículo por placa");
    info!("   POST   /veiculo - Insertar o actualizar vehículo");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("no se pudo escuchar en {}", addr))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
