//! # Customer Store
//!
//! The persistence gateway the service depends on. Two implementations:
//!
//! - [`SqliteCustomerStore`] - relational storage through a sqlx pool
//! - [`InMemoryCustomerStore`] - map-backed storage for tests and local runs
//!
//! Every call is one atomic unit. Nothing is held open across calls.

mod errors;
mod memory;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryCustomerStore;
pub use sqlite::SqliteCustomerStore;

use async_trait::async_trait;

use crate::model::{Customer, SaveCustomer};

/// Storage operations over customer records
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers, in storage order
    async fn find_all(&self) -> StoreResult<Vec<Customer>>;

    /// A single customer, or `None` if no row has this id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>>;

    /// Insert or update, returning the row as stored
    async fn save(&self, customer: SaveCustomer) -> StoreResult<Customer>;

    /// Remove the row if present. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
