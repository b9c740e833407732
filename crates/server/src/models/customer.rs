//! Customer domain types.

use patron_core::{CustomerId, Email};

/// A customer record.
///
/// `id` is `None` until the store has persisted the record and assigned an
/// id from the sequence; it never changes afterwards. Every `Customer`
/// handed out by the data-access layer carries `Some(id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned identifier, absent before persistence.
    pub id: Option<CustomerId>,
    /// Display name, non-empty.
    pub name: String,
    pub age: i32,
    /// Unique across all customers.
    pub email: Email,
}

/// Input for registering a new customer. All fields required.
#[derive(Debug, Clone)]
pub struct CustomerRegistration {
    pub name: String,
    pub age: i32,
    pub email: Email,
}

/// Input for a partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<Email>,
}
