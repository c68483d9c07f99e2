//! # Customer Model
//!
//! The customer record, the request body used to create or update one,
//! and the field rules that body must satisfy.

mod customer;
mod validation;

pub use customer::{Customer, CustomerInput, SaveCustomer};
pub use validation::field_messages;
