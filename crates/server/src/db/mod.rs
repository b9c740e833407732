//! Database access for the customer store.
//!
//! # Tables
//!
//! - `customer` - the single entity this service manages (`id`, `name`,
//!   `age`, `email` with a unique constraint on `email`)
//!
//! # Backends
//!
//! Two interchangeable implementations of the [`CustomerDao`] capability:
//!
//! - [`SqlCustomerDao`] - one parameterized statement per operation; updates
//!   write each column with its own statement
//! - [`RepoCustomerDao`] - delegates to the generic [`CrudRepository`] for
//!   `Customer`, which always saves the whole row
//!
//! The backend is chosen once at startup from configuration (see
//! [`dao::build_dao`]), never per request.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p patron-cli -- migrate
//! ```

pub mod customers;
pub mod dao;
pub mod repository;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use customers::SqlCustomerDao;
pub use dao::{CustomerDao, build_dao};
pub use repository::{CrudRepository, PgCustomerRepository, RepoCustomerDao};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Addressed entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Translate a unique violation into [`RepositoryError::Conflict`].
///
/// Both backends can trip the `customer_email_unique` constraint when a
/// concurrent writer slips between the service's pre-check and the write;
/// the caller sees that as a conflict rather than a generic database error.
pub(crate) fn conflict_on_unique(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("email already exists".to_owned());
    }
    RepositoryError::Database(e)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
