//! In-memory customer store

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::model::{Customer, SaveCustomer};

use super::errors::{StoreError, StoreResult};
use super::CustomerStore;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Customer>,
}

/// Customer store backed by an ordered map.
///
/// Ids are assigned sequentially starting at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    table: RwLock<Table>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, customer: SaveCustomer) -> StoreResult<Customer> {
        let mut table = self.table.write().map_err(poisoned)?;

        match customer {
            SaveCustomer::New(input) => {
                table.last_id += 1;
                let stored = Customer {
                    id: table.last_id,
                    first_name: input.first_name,
                    last_name: input.last_name,
                    email: input.email,
                    created_at: Utc::now(),
                };
                table.rows.insert(stored.id, stored.clone());
                Ok(stored)
            }
            SaveCustomer::Existing(customer) => {
                let row = table
                    .rows
                    .get_mut(&customer.id)
                    .ok_or(StoreError::Missing(customer.id))?;
                row.first_name = customer.first_name;
                row.last_name = customer.last_name;
                row.email = customer.email;
                Ok(row.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }
}
