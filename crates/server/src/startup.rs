use std::{future::Future, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::customer::repo::SeaOrmCustomerRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file first (`CONFIG_PATH`, default `config.toml`), environment variables otherwise.
///
/// The file error is handed back instead of logged so the caller can report it
/// once logging has been set up from the returned config.
pub fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::from_env(), Some(e)),
    }
}

/// Connect the pool, apply migrations when enabled and wire the SeaORM repository.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let mut db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    if db_cfg.url.trim().is_empty() {
        db_cfg.url = models::db::DATABASE_URL.clone();
    }

    let db = models::db::connect_with_config(&db_cfg).await?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("database unreachable: {e}")))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Runtime(format!("migration failed: {e}")))?;
        info!("database migrations applied");
    }

    Ok(AppState::new(Arc::new(SeaOrmCustomerRepository { db })))
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Serve the API with the given config until `shutdown` resolves.
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {addr}: {e}")))?;
    info!(addr = %listener.local_addr()?, "customers api listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}
