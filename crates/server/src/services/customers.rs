//! Customer service: lookup, registration, deletion, and the field-level
//! update reconciler.
//!
//! The service is a stateless façade over the configured [`CustomerDao`]
//! backend. It owns the two policy rules the storage layer does not:
//! email uniqueness is checked before every write that introduces an email,
//! and an update that changes nothing is rejected instead of silently
//! accepted, so every successful update changed at least one field.

use std::sync::Arc;

use patron_core::{CustomerId, Email};

use crate::db::{CustomerDao, RepositoryError};
use crate::models::{Customer, CustomerRegistration, CustomerUpdate};

/// Errors raised by [`CustomerService`].
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    /// No customer with the requested id.
    #[error("customer with id [{0}] not found")]
    NotFound(CustomerId),

    /// The email is already in use by another customer.
    #[error("email {0} already taken")]
    EmailTaken(Email),

    /// An update request whose fields all match the stored values.
    #[error("no data changes found")]
    NoChanges,

    /// Underlying store failure, surfaced as-is.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Stateless customer operations over the configured store backend.
pub struct CustomerService {
    dao: Arc<dyn CustomerDao>,
}

impl CustomerService {
    #[must_use]
    pub fn new(dao: Arc<dyn CustomerDao>) -> Self {
        Self { dao }
    }

    /// Look up a customer.
    ///
    /// # Errors
    ///
    /// [`CustomerError::NotFound`] when the id does not exist.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.dao
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Unordered snapshot of all customers.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.dao.find_all().await?)
    }

    /// Register a new customer.
    ///
    /// The store assigns the id during the insert; it is not reported back.
    ///
    /// # Errors
    ///
    /// [`CustomerError::EmailTaken`] when the email is already in use.
    pub async fn register(&self, registration: CustomerRegistration) -> Result<(), CustomerError> {
        if self.exists_by_email(&registration.email).await? {
            return Err(CustomerError::EmailTaken(registration.email));
        }

        self.dao
            .save(&Customer {
                id: None,
                name: registration.name,
                age: registration.age,
                email: registration.email,
            })
            .await?;

        Ok(())
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// [`CustomerError::NotFound`] when the id does not exist. The DAO-level
    /// delete itself is idempotent; the existence pre-check is what turns an
    /// absent id into an error here.
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.exists_by_id(id).await? {
            return Err(CustomerError::NotFound(id));
        }

        self.dao.delete_by_id(id).await?;

        Ok(())
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn exists_by_email(&self, email: &Email) -> Result<bool, CustomerError> {
        Ok(self.dao.exists_by_email(email).await?)
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn exists_by_id(&self, id: CustomerId) -> Result<bool, CustomerError> {
        Ok(self.dao.exists_by_id(id).await?)
    }

    /// Apply a partial update, writing only when something actually changed.
    ///
    /// Stages each field that is present in the request and differs from the
    /// stored value. A staged email is conflict-checked before anything is
    /// written, so a taken email rejects the entire update. Returns the
    /// merged customer after a successful write.
    ///
    /// # Errors
    ///
    /// - [`CustomerError::NotFound`] when the id does not exist.
    /// - [`CustomerError::EmailTaken`] when the staged email is in use.
    /// - [`CustomerError::NoChanges`] when every supplied field matches the
    ///   stored value (or no field was supplied).
    pub async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        let mut customer = self.find_by_id(id).await?;

        let mut changed = false;

        if let Some(name) = update.name
            && name != customer.name
        {
            customer.name = name;
            changed = true;
        }

        if let Some(age) = update.age
            && age != customer.age
        {
            customer.age = age;
            changed = true;
        }

        if let Some(email) = update.email
            && email != customer.email
        {
            if self.exists_by_email(&email).await? {
                return Err(CustomerError::EmailTaken(email));
            }
            customer.email = email;
            changed = true;
        }

        if !changed {
            return Err(CustomerError::NoChanges);
        }

        self.dao.update(&customer).await?;

        Ok(customer)
    }
}
