//! # HTTP Server Module
//!
//! Builds and runs the Axum server for the customer API.
//!
//! # Endpoints
//!
//! - `/health` - Liveness check with the crate version
//! - `{api_prefix}/customers` - Customer CRUD (prefix defaults to `/api`)

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
