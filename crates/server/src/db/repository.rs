//! Generic CRUD repository and the delegating DAO backend.
//!
//! [`CrudRepository`] is the mapper-style alternative to writing statements
//! by hand: entities go in and out whole. [`PgCustomerRepository`] implements
//! it for `Customer`, and [`RepoCustomerDao`] adapts it to the
//! [`CustomerDao`] capability. Unlike [`super::SqlCustomerDao`], an update
//! through this backend always overwrites the full row.

use async_trait::async_trait;
use sqlx::PgPool;

use patron_core::{CustomerId, Email};

use super::customers::CustomerRow;
use super::{CustomerDao, RepositoryError, conflict_on_unique};
use crate::models::Customer;

const SQL_SELECT_BY_ID: &str = "SELECT id, name, age, email FROM customer WHERE id = $1";
const SQL_SELECT_ALL: &str = "SELECT id, name, age, email FROM customer";
const SQL_EXISTS_BY_ID: &str = "SELECT EXISTS (SELECT 1 FROM customer WHERE id = $1)";
const SQL_EXISTS_BY_EMAIL: &str = "SELECT EXISTS (SELECT 1 FROM customer WHERE email = $1)";
const SQL_INSERT: &str = "INSERT INTO customer (name, age, email) VALUES ($1, $2, $3)";
const SQL_UPDATE_ROW: &str = "UPDATE customer SET name = $1, age = $2, email = $3 WHERE id = $4";
const SQL_DELETE_BY_ID: &str = "DELETE FROM customer WHERE id = $1";

/// Generic whole-entity persistence over a relational store.
///
/// `save` carries insert-or-overwrite semantics: an entity without an
/// identity is inserted, one with an identity replaces the stored row.
#[async_trait]
pub trait CrudRepository<T, Id>: Send + Sync {
    async fn find_by_id(&self, id: Id) -> Result<Option<T>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Insert the entity when it has no id, otherwise overwrite the stored
    /// row addressed by its id.
    async fn save(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn exists_by_id(&self, id: Id) -> Result<bool, RepositoryError>;

    /// Remove the row. Succeeds when the id is absent.
    async fn delete_by_id(&self, id: Id) -> Result<(), RepositoryError>;
}

/// `CrudRepository` for `Customer` rows in `PostgreSQL`.
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finder for the email uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the query fails.
    pub async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(SQL_EXISTS_BY_EMAIL)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

#[async_trait]
impl CrudRepository<Customer, CustomerId> for PgCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(SQL_SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(SQL_SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn save(&self, entity: &Customer) -> Result<(), RepositoryError> {
        match entity.id {
            None => {
                sqlx::query(SQL_INSERT)
                    .bind(&entity.name)
                    .bind(entity.age)
                    .bind(&entity.email)
                    .execute(&self.pool)
                    .await
                    .map_err(conflict_on_unique)?;
            }
            Some(id) => {
                let result = sqlx::query(SQL_UPDATE_ROW)
                    .bind(&entity.name)
                    .bind(entity.age)
                    .bind(&entity.email)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(conflict_on_unique)?;

                if result.rows_affected() == 0 {
                    return Err(RepositoryError::NotFound);
                }
            }
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(SQL_EXISTS_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query(SQL_DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// [`CustomerDao`] backend that delegates to the generic repository.
pub struct RepoCustomerDao {
    repository: PgCustomerRepository,
}

impl RepoCustomerDao {
    #[must_use]
    pub const fn new(repository: PgCustomerRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerDao for RepoCustomerDao {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        self.repository.find_all().await
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        self.repository.exists_by_email(email).await
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        self.repository.exists_by_id(id).await
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        self.repository.save(customer).await
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        // Whole-row overwrite; the repository has no narrower write.
        self.repository.save(customer).await
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError> {
        self.repository.delete_by_id(id).await
    }
}
