//! Pilot record.
//!
//! # Invariants
//! - `team_id` must name an existing team when the pilot is written; the
//!   `pilot.team_id` foreign key enforces this, not the model.

use crate::model::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Store-assigned pilot identifier (`pilot.id`).
pub type PilotId = i64;

/// Input for creating a pilot. The identifier is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPilot {
    pub first_name: String,
    pub last_name: String,
    pub car_number: i32,
    /// Career win count.
    pub wins: i32,
    pub team_id: TeamId,
}

impl NewPilot {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        car_number: i32,
        wins: i32,
        team_id: TeamId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            car_number,
            wins,
            team_id,
        }
    }
}

/// Persisted pilot row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    pub id: PilotId,
    pub first_name: String,
    pub last_name: String,
    pub car_number: i32,
    /// Career win count.
    pub wins: i32,
    /// Owning team. Resolve with `RosterService::pilot_team` or
    /// `TeamRepository::get_team`.
    pub team_id: TeamId,
}

impl Pilot {
    /// Attaches a store-assigned id to a creation input.
    pub fn from_new(id: PilotId, new: NewPilot) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            car_number: new.car_number,
            wins: new.wins,
            team_id: new.team_id,
        }
    }

    /// `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn belongs_to(&self, team: &Team) -> bool {
        self.team_id == team.id
    }
}
