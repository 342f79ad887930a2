//! GraphView Server: diagram conversion and user registration backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use graphview_api::{AppState, build_app};
use graphview_core::config::{AppConfig, DatabaseConfig, ModulesConfig};
use graphview_core::error::AppError;
use graphview_database::migration::run_migrations;
use graphview_database::{DatabasePool, MemoryUserRepository, PgUserRepository, UserStore};
use graphview_module::{DynamicLoader, ModuleRegistry};

#[tokio::main]
async fn main() {
    let env = std::env::var("GRAPHVIEW_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting GraphView");

    // ── Step 1: Module registry ──────────────────────────────────
    let registry = build_registry(&config.modules)?;

    // ── Step 2: User store ───────────────────────────────────────
    let (users, db_pool) = build_user_store(&config.database).await?;

    // ── Step 3: HTTP server ──────────────────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_app(AppState::new(config, registry, users));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "GraphView server listening");

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, draining connections");
        let _ = shutdown_tx.send(true);
    });

    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        () = drain_deadline => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed, dropping open connections");
        }
    }

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    info!("GraphView server shut down");
    Ok(())
}

/// Registers compiled-in modules, then any shared-library modules.
fn build_registry(config: &ModulesConfig) -> Result<ModuleRegistry, AppError> {
    let mut builder = ModuleRegistry::builder();
    builder.register(module_edgelist::descriptor());

    if config.auto_load {
        let loaded = DynamicLoader::new().load_directory(Path::new(&config.directory))?;
        builder.register_all(loaded);
    }

    Ok(builder.build())
}

/// Uses PostgreSQL when a database URL is configured, memory otherwise.
async fn build_user_store(
    config: &DatabaseConfig,
) -> Result<(Arc<dyn UserStore>, Option<DatabasePool>), AppError> {
    if config.url.is_none() {
        warn!("No database configured, registered users are kept in memory");
        let users: Arc<dyn UserStore> = Arc::new(MemoryUserRepository::new());
        return Ok((users, None));
    }

    let pool = DatabasePool::connect(config).await?;
    run_migrations(pool.pool()).await?;
    let users: Arc<dyn UserStore> = Arc::new(PgUserRepository::new(pool.pool().clone()));
    Ok((users, Some(pool)))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
}
