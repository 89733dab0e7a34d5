//! Team roster use-case service.
//!
//! # Responsibility
//! - Resolve the pilot -> team reference and the team -> pilots inverse side
//!   with explicit repository calls.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::pilot::Pilot;
use crate::model::team::Team;
use crate::repo::error::RepoResult;
use crate::repo::pilot_repo::PilotRepository;
use crate::repo::team_repo::TeamRepository;
use serde::{Deserialize, Serialize};

/// A team together with the pilots that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team: Team,
    /// Pilots in insertion order.
    pub pilots: Vec<Pilot>,
}

/// Read-only join service over team and pilot repositories.
pub struct RosterService<T: TeamRepository, P: PilotRepository> {
    teams: T,
    pilots: P,
}

impl<T: TeamRepository, P: PilotRepository> RosterService<T, P> {
    /// Creates a service using the provided repository implementations.
    pub fn new(teams: T, pilots: P) -> Self {
        Self { teams, pilots }
    }

    /// Loads the team named exactly `team_name` with its pilots.
    ///
    /// Returns `Ok(None)` when no team has that name.
    pub fn team_roster(&self, team_name: &str) -> RepoResult<Option<TeamRoster>> {
        let Some(team) = self.teams.find_team_by_name(team_name)? else {
            return Ok(None);
        };
        let pilots = self.pilots.find_pilots_by_team_id(team.id)?;
        Ok(Some(TeamRoster { team, pilots }))
    }

    /// Resolves the owning team of `pilot`.
    ///
    /// Returns `Ok(None)` when the referenced team is gone.
    pub fn pilot_team(&self, pilot: &Pilot) -> RepoResult<Option<Team>> {
        self.teams.get_team(pilot.team_id)
    }

    /// Lists every team, in insertion order, with its pilots.
    pub fn list_rosters(&self) -> RepoResult<Vec<TeamRoster>> {
        self.teams
            .list_teams()?
            .into_iter()
            .map(|team| {
                let pilots = self.pilots.find_pilots_by_team_id(team.id)?;
                Ok(TeamRoster { team, pilots })
            })
            .collect()
    }
}
