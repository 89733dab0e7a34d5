//! Domain model for racing teams and their pilots.
//!
//! # Responsibility
//! - Define the records persisted in the `team` and `pilot` tables.
//! - Keep creation inputs (`NewTeam`, `NewPilot`) apart from stored records,
//!   since identifiers are assigned by the store.
//!
//! # Invariants
//! - Identifiers are assigned once by SQLite and never reused.
//! - A pilot references its team only through `team_id`; nothing is loaded
//!   implicitly.

pub mod pilot;
pub mod team;
