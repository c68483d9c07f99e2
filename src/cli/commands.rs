//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::rest_api::AppState;
use crate::service::CustomerService;
use crate::store::{CustomerStore, InMemoryCustomerStore, SqliteCustomerStore};

use super::args::Command;
use super::config::{AppConfig, StoreKind};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Open the store selected by the configuration
pub async fn open_store(config: &AppConfig) -> CliResult<Arc<dyn CustomerStore>> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Ok(Arc::new(InMemoryCustomerStore::new()))
        }
        StoreKind::Sqlite => {
            tracing::info!(url = %config.database.url, "connecting to database");
            let store =
                SqliteCustomerStore::connect(&config.database.url, config.database.max_connections)
                    .await?;
            Ok(Arc::new(store))
        }
    }
}

/// Wire store, service, and handler state together
pub async fn build_state(config: &AppConfig) -> CliResult<AppState> {
    let store = open_store(config).await?;
    let service = CustomerService::new(store);
    Ok(AppState::new(service).with_legacy_update_status(config.legacy_update_status))
}

/// Start the HTTP server
///
/// 1. Load configuration (file or defaults), apply `--port`
/// 2. Open the store
/// 3. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::resolve(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let state = build_state(&config).await?;
        let server = HttpServer::new(config.server.clone(), state);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate the configuration and print the effective values
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = AppConfig::resolve(config_path)?;
    write_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_rejects_zero_port() {
        let err = serve(None, Some(0)).unwrap_err();
        assert_eq!(err.code(), &super::super::CliErrorCode::ConfigError);
    }

    #[tokio::test]
    async fn test_build_state_with_memory_store() {
        let config = AppConfig {
            store: StoreKind::Memory,
            legacy_update_status: true,
            ..Default::default()
        };

        let state = build_state(&config).await.unwrap();
        assert_eq!(state.update_status, axum::http::StatusCode::CREATED);
        assert!(state.service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let config = AppConfig {
            database: super::super::config::DatabaseConfig {
                url,
                max_connections: 1,
            },
            ..Default::default()
        };

        let store = open_store(&config).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_unreachable_database_fails() {
        let config = AppConfig {
            database: super::super::config::DatabaseConfig {
                url: "sqlite:///nonexistent-dir/customers.db".to_string(),
                max_connections: 1,
            },
            ..Default::default()
        };

        let err = open_store(&config).await.err().unwrap();
        assert_eq!(err.code(), &super::super::CliErrorCode::BootFailed);
    }
}
