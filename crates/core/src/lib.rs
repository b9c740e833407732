//! Patron Core - Shared domain types.
//!
//! This crate provides the types shared between the Patron components:
//! - `server` - The customer-management REST service
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database support (sqlx `Type`/`Encode`/`Decode` impls) is gated behind the
//! `postgres` feature so consumers that never touch a database stay light.
//!
//! # Modules
//!
//! - [`types`] - `CustomerId` and `Email` newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
