//! Core data access for racing teams and pilots.
//! This crate owns the SQLite schema, the repositories and the demo seed.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::pilot::{NewPilot, Pilot, PilotId};
pub use model::team::{NewTeam, Team, TeamId};
pub use repo::error::{RepoError, RepoResult};
pub use repo::pilot_repo::{PilotRepository, SqlitePilotRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use seed::{seed_demo_data, SeedSummary};
pub use service::roster_service::{RosterService, TeamRoster};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
