//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by a customer store.
///
/// The service passes these through untouched; the REST layer decides
/// how they are reported.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver, connection, or constraint failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update targeted a row that no longer exists
    #[error("no customer row with id {0}")]
    Missing(i64),

    /// The store cannot serve requests (poisoned lock, closed pool)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::Missing(4).to_string(), "no customer row with id 4");
        assert_eq!(
            StoreError::Unavailable("lock poisoned".to_string()).to_string(),
            "store unavailable: lock poisoned"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err = StoreError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, StoreError::Database(_)));
        assert!(err.to_string().starts_with("database error:"));
    }
}
