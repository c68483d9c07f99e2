//! customers - a CRUD REST backend for customer records
//!
//! Layers, leaves first: [`model`], [`store`], [`service`], [`rest_api`],
//! [`http_server`]. [`cli`] wires them together from configuration.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod service;
pub mod store;
