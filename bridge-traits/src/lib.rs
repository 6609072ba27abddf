//! # Host Bridge Traits
//!
//! Storage abstraction that the lyrics core reads its corpus through.
//!
//! ## Overview
//!
//! The search core never talks to a database driver directly. It consumes the
//! read-only [`DatabaseAdapter`](database::DatabaseAdapter) contract defined
//! here, which the native SQLite adapter in `core-library` implements and which
//! tests can replace with in-memory fakes.
//!
//! ## Error Handling
//!
//! All bridge operations return [`BridgeError`]. Adapters classify driver
//! failures into "storage unreachable" ([`BridgeError::Unavailable`]) and
//! "storage reachable but unusable" ([`BridgeError::DatabaseError`]) so that
//! callers can surface the difference to users.

pub mod database;
pub mod error;

pub use database::{DatabaseAdapter, DatabaseConfig, DatabaseStatistics, QueryRow, QueryValue};
pub use error::{BridgeError, Result};
