//! SQLite customer store
//!
//! Each operation runs inside its own transaction: begin, one statement,
//! commit. `created_at` is written on insert and never appears in an
//! UPDATE statement.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::model::{Customer, CustomerInput, SaveCustomer};

use super::errors::{StoreError, StoreResult};
use super::CustomerStore;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const COLUMNS: &str = "id, first_name, last_name, email, created_at";

/// Customer store over a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    /// Wrap an existing pool. The table must already exist.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url` and make sure the table exists.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// A private in-memory database on a single connection.
    ///
    /// The connection is never recycled, since closing it drops the data.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `customers` table if it is absent.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn insert(&self, input: CustomerInput) -> StoreResult<Customer> {
        let sql = format!(
            "INSERT INTO customers (first_name, last_name, email, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let stored = sqlx::query_as::<_, Customer>(&sql)
            .bind(input.first_name)
            .bind(input.last_name)
            .bind(input.email)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(stored)
    }

    async fn update(&self, customer: Customer) -> StoreResult<Customer> {
        let sql = format!(
            "UPDATE customers SET first_name = ?, last_name = ?, email = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let stored = sqlx::query_as::<_, Customer>(&sql)
            .bind(customer.first_name)
            .bind(customer.last_name)
            .bind(customer.email)
            .bind(customer.id)
            .fetch_optional(&mut *tx)
            .await?;

        match stored {
            Some(stored) => {
                tx.commit().await?;
                Ok(stored)
            }
            None => {
                tx.rollback().await?;
                Err(StoreError::Missing(customer.id))
            }
        }
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        let sql = format!("SELECT {COLUMNS} FROM customers ORDER BY id");

        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        let sql = format!("SELECT {COLUMNS} FROM customers WHERE id = ?");

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(row)
    }

    async fn save(&self, customer: SaveCustomer) -> StoreResult<Customer> {
        match customer {
            SaveCustomer::New(input) => self.insert(input).await,
            SaveCustomer::Existing(customer) => self.update(customer).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> SaveCustomer {
        SaveCustomer::New(CustomerInput::new("Ana", "Lopez", "ana@example.com"))
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        let stored = store.save(ana()).await.unwrap();

        assert_eq!(stored.id, 1);
        let found = store.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        for _ in 0..3 {
            store.save(ana()).await.unwrap();
        }

        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_leaves_created_at() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        let stored = store.save(ana()).await.unwrap();

        let mut changed = stored.clone();
        changed.last_name = "Perez".to_string();
        let updated = store.save(SaveCustomer::Existing(changed)).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.last_name, "Perez");
        assert_eq!(updated.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        let mut ghost = store.save(ana()).await.unwrap();
        ghost.id = 99;

        let err = store.save(SaveCustomer::Existing(ghost)).await.unwrap_err();
        assert!(matches!(err, StoreError::Missing(99)));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        store.delete_by_id(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_pool_is_database_error() {
        let store = SqliteCustomerStore::in_memory().await.unwrap();
        store.pool().close().await;

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
