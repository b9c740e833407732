//! End-to-end tests for Patron.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, apply migrations, start the server
//! cargo run -p patron-cli -- migrate
//! cargo run -p patron-server
//!
//! # Run the (otherwise ignored) end-to-end tests
//! cargo test -p patron-integration-tests -- --ignored
//! ```
//!
//! Tests live in `tests/customers_api.rs` and talk to a running server over
//! HTTP (`PATRON_BASE_URL`, default `http://localhost:3000`). Each test
//! salts its emails with a UUID so repeated runs against a dirty database
//! stay independent.
