//! Business services.

pub mod customers;

pub use customers::{CustomerError, CustomerService};
