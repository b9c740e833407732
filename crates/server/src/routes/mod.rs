//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness check
//! GET    /health/ready                    - Readiness check (pings the database)
//!
//! # Customers
//! GET    /api/v1/customers                - List all customers
//! POST   /api/v1/customers                - Register a customer
//! GET    /api/v1/customers/{customer_id}  - Customer by id
//! PUT    /api/v1/customers/{customer_id}  - Partial update
//! DELETE /api/v1/customers/{customer_id}  - Delete
//! ```

pub mod customers;

use axum::Router;

use crate::state::AppState;

/// Assemble all application routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(customers::router())
}
