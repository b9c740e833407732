//! Direct-SQL customer data access.
//!
//! One parameterized statement per operation. Updates are field-granular:
//! each column is written by its own single-column statement, never a
//! whole-row overwrite, which keeps the write surface of an update to the
//! columns it actually names.

use async_trait::async_trait;
use sqlx::PgPool;

use patron_core::{CustomerId, Email};

use super::{CustomerDao, RepositoryError, conflict_on_unique};
use crate::models::Customer;

const SQL_SELECT_BY_ID: &str = "SELECT id, name, age, email FROM customer WHERE id = $1";
const SQL_SELECT_ALL: &str = "SELECT id, name, age, email FROM customer";
const SQL_COUNT_BY_ID: &str = "SELECT COUNT(id) FROM customer WHERE id = $1";
const SQL_COUNT_BY_EMAIL: &str = "SELECT COUNT(id) FROM customer WHERE email = $1";
const SQL_INSERT: &str = "INSERT INTO customer (name, age, email) VALUES ($1, $2, $3)";
const SQL_DELETE_BY_ID: &str = "DELETE FROM customer WHERE id = $1";
const SQL_UPDATE_NAME_BY_ID: &str = "UPDATE customer SET name = $1 WHERE id = $2";
const SQL_UPDATE_AGE_BY_ID: &str = "UPDATE customer SET age = $1 WHERE id = $2";
const SQL_UPDATE_EMAIL_BY_ID: &str = "UPDATE customer SET email = $1 WHERE id = $2";

/// Raw `customer` row.
///
/// Pure shape translation: a row missing a column fails the calling query
/// with a decode error, surfaced as [`RepositoryError::Database`].
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CustomerRow {
    pub(crate) id: CustomerId,
    pub(crate) name: String,
    pub(crate) age: i32,
    pub(crate) email: Email,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            age: row.age,
            email: row.email,
        }
    }
}

/// [`CustomerDao`] backend issuing direct SQL statements.
pub struct SqlCustomerDao {
    pool: PgPool,
}

impl SqlCustomerDao {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerDao for SqlCustomerDao {
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

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(SQL_COUNT_BY_EMAIL)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(SQL_COUNT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query(SQL_INSERT)
            .bind(&customer.name)
            .bind(customer.age)
            .bind(&customer.email)
            .execute(&self.pool)
            .await
            .map_err(conflict_on_unique)?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let Some(id) = customer.id else {
            return Err(RepositoryError::NotFound);
        };

        sqlx::query(SQL_UPDATE_NAME_BY_ID)
            .bind(&customer.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        sqlx::query(SQL_UPDATE_AGE_BY_ID)
            .bind(customer.age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        sqlx::query(SQL_UPDATE_EMAIL_BY_ID)
            .bind(&customer.email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(conflict_on_unique)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query(SQL_DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
