//! # Customer REST API Module
//!
//! HTTP endpoints for customer CRUD. Handlers validate input, call the
//! service, and translate every outcome into a status code plus a JSON
//! body.

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use response::Envelope;
pub use server::{customer_routes, AppState};
