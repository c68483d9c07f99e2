//! CLI module
//!
//! Provides command-line interface for:
//! - serve: load configuration, open the store, run the HTTP server
//! - check-config: validate configuration and print it

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_state, check_config, open_store, run, run_command, serve};
pub use config::{AppConfig, DatabaseConfig, StoreKind};
pub use errors::{CliError, CliErrorCode, CliResult};
