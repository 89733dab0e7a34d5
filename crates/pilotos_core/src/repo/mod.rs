//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for teams and pilots.
//! - Isolate SQLite query details from service and seeding code.
//!
//! # Invariants
//! - Each repository call is a single SQL statement, so it runs in SQLite's
//!   implicit per-statement transaction.
//! - Repositories only accept connections whose schema is fully migrated.
//! - Storage failures are returned as `RepoError::Db` without translation.

pub mod error;
pub mod pilot_repo;
mod schema;
pub mod team_repo;
