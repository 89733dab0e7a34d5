//! Demo dataset reset.
//!
//! # Responsibility
//! - Replace the whole store content with two fixed teams and four pilots.
//!
//! # Invariants
//! - Runs only when a caller invokes `seed_demo_data`; opening a database never
//!   seeds it.
//! - Pilots are removed before teams so the `pilot.team_id` foreign key holds.
//! - The reset is one transaction: on failure the previous data is kept.
//! - Running it repeatedly yields the same teams and pilots (ids differ).

use crate::model::pilot::{NewPilot, Pilot};
use crate::model::team::{NewTeam, Team};
use crate::repo::error::RepoResult;
use crate::repo::pilot_repo::{PilotRepository, SqlitePilotRepository};
use crate::repo::team_repo::{SqliteTeamRepository, TeamRepository};
use log::{error, info};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::Serialize;
use std::time::Instant;

struct SeedTeam {
    name: &'static str,
    base_location: &'static str,
    founding_year: i32,
}

struct SeedPilot {
    first_name: &'static str,
    last_name: &'static str,
    car_number: i32,
    wins: i32,
    /// Index into `DEMO_TEAMS`.
    team: usize,
}

const DEMO_TEAMS: &[SeedTeam] = &[
    SeedTeam {
        name: "Mercedes",
        base_location: "Brackley, UK",
        founding_year: 1970,
    },
    SeedTeam {
        name: "Red Bull",
        base_location: "Milton Keynes, UK",
        founding_year: 2005,
    },
];

const DEMO_PILOTS: &[SeedPilot] = &[
    SeedPilot {
        first_name: "Lewis",
        last_name: "Hamilton",
        car_number: 44,
        wins: 103,
        team: 0,
    },
    SeedPilot {
        first_name: "George",
        last_name: "Russell",
        car_number: 63,
        wins: 1,
        team: 0,
    },
    SeedPilot {
        first_name: "Max",
        last_name: "Verstappen",
        car_number: 1,
        wins: 54,
        team: 1,
    },
    SeedPilot {
        first_name: "Sergio",
        last_name: "Perez",
        car_number: 11,
        wins: 6,
        team: 1,
    },
];

/// Outcome of one `seed_demo_data` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Teams inserted, in insertion order.
    pub teams: Vec<Team>,
    /// Pilots inserted, in insertion order.
    pub pilots: Vec<Pilot>,
    /// Teams deleted before inserting.
    pub removed_teams: usize,
    /// Pilots deleted before inserting.
    pub removed_pilots: usize,
}

/// Resets the store to the demo dataset.
///
/// Deletes every pilot, then every team, then inserts the demo teams and
/// pilots, all inside one immediate transaction.
///
/// # Errors
/// - Returns storage errors unchanged; the transaction is rolled back.
pub fn seed_demo_data(conn: &mut Connection) -> RepoResult<SeedSummary> {
    let started_at = Instant::now();
    info!("event=seed module=seed status=start");

    let tx = Transaction::new(conn, TransactionBehavior::Immediate)?;
    match reset_in_tx(&tx) {
        Ok(summary) => {
            tx.commit()?;
            info!(
                "event=seed module=seed status=ok removed_pilots={} removed_teams={} teams={} pilots={} duration_ms={}",
                summary.removed_pilots,
                summary.removed_teams,
                summary.teams.len(),
                summary.pilots.len(),
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=seed module=seed status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn reset_in_tx(tx: &Transaction<'_>) -> RepoResult<SeedSummary> {
    let teams_repo = SqliteTeamRepository::try_new(tx)?;
    let pilots_repo = SqlitePilotRepository::try_new(tx)?;

    let removed_pilots = pilots_repo.delete_all_pilots()?;
    let removed_teams = teams_repo.delete_all_teams()?;

    let teams = DEMO_TEAMS
        .iter()
        .map(|seed| {
            teams_repo.create_team(&NewTeam::new(
                seed.name,
                seed.base_location,
                seed.founding_year,
            ))
        })
        .collect::<RepoResult<Vec<_>>>()?;

    let pilots = DEMO_PILOTS
        .iter()
        .map(|seed| {
            pilots_repo.create_pilot(&NewPilot::new(
                seed.first_name,
                seed.last_name,
                seed.car_number,
                seed.wins,
                teams[seed.team].id,
            ))
        })
        .collect::<RepoResult<Vec<_>>>()?;

    Ok(SeedSummary {
        teams,
        pilots,
        removed_teams,
        removed_pilots,
    })
}
