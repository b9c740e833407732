//! The customer data-access capability.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use patron_core::{CustomerId, Email};

use super::{PgCustomerRepository, RepoCustomerDao, RepositoryError, SqlCustomerDao};
use crate::config::StorageBackend;
use crate::models::Customer;

/// Data access for customer records.
///
/// The service layer talks to the store exclusively through this trait and
/// never learns which backend is behind it. Both implementations must treat
/// a missing row as `Ok(None)`/`Ok(false)` rather than an error, and must
/// surface a unique-email violation as [`RepositoryError::Conflict`].
#[async_trait]
pub trait CustomerDao: Send + Sync {
    /// Look up a customer by id. No match is not an error.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Unordered snapshot of all customers at call time.
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError>;

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, RepositoryError>;

    /// Insert a new row. The store assigns the id; it is not returned -
    /// callers re-query when they need it.
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Persist changes to an existing record addressed by its id.
    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Remove the row. Idempotent: deleting an absent id succeeds.
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError>;
}

/// Construct the configured [`CustomerDao`] backend.
///
/// Called once at process start; the choice is baked into the returned
/// trait object for the lifetime of the process.
#[must_use]
pub fn build_dao(backend: StorageBackend, pool: PgPool) -> Arc<dyn CustomerDao> {
    match backend {
        StorageBackend::Sql => Arc::new(SqlCustomerDao::new(pool)),
        StorageBackend::Repository => {
            Arc::new(RepoCustomerDao::new(PgCustomerRepository::new(pool)))
        }
    }
}
