//! CLI argument definitions using clap
//!
//! Commands:
//! - customers serve [--config <path>] [--port <port>]
//! - customers check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Customers - a CRUD REST backend for customer records
#[derive(Parser, Debug)]
#[command(name = "customers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then print it as JSON
    CheckConfig {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
