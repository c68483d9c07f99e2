//! # Customer Service
//!
//! Thin pass-through over a [`CustomerStore`]. Failures are logged and
//! returned unchanged; translating them for clients is the REST layer's job.

use std::sync::Arc;

use crate::model::{Customer, SaveCustomer};
use crate::store::{CustomerStore, StoreResult};

/// Customer operations used by the REST layer
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        self.store
            .find_all()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "listing customers failed"))
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        self.store
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "customer lookup failed"))
    }

    pub async fn save(&self, customer: SaveCustomer) -> StoreResult<Customer> {
        let saved = self
            .store
            .save(customer)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "saving customer failed"))?;

        tracing::debug!(id = saved.id, "customer saved");
        Ok(saved)
    }

    pub async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.store
            .delete_by_id(id)
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "deleting customer failed"))?;

        tracing::debug!(id, "customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerInput;
    use crate::store::InMemoryCustomerStore;

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerStore::new()))
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let service = service();
        let saved = service
            .save(SaveCustomer::New(CustomerInput::new("Ana", "Lopez", "ana@example.com")))
            .await
            .unwrap();

        let found = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        assert_eq!(service().find_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_succeeds() {
        let service = service();
        service.delete_by_id(3).await.unwrap();
        assert!(service.list_all().await.unwrap().is_empty());
    }
}
