//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, route prefix,
//! and CORS settings.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Prefix the customer routes are nested under (default: "/api")
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// CORS allowed origins (default: ["http://localhost:4200"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:4200".to_string()] // Angular dev server
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_prefix: default_api_prefix(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the settings the router depends on.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }

        if !self.api_prefix.starts_with('/') {
            return Err(format!(
                "server.api_prefix must start with '/': '{}'",
                self.api_prefix
            ));
        }

        for origin in &self.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(format!("invalid CORS origin: '{}'", origin));
            }
        }

        Ok(())
    }
}
