//! Use-case services composed from repositories.
//!
//! # Responsibility
//! - Join teams and pilots explicitly for callers that need both.
//! - Keep CLI layers decoupled from SQL details.

pub mod roster_service;
