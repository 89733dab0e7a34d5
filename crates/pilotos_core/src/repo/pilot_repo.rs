//! Pilot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `pilot` table.
//! - Provide lookup of pilots by owning team as an explicit query.
//!
//! # Invariants
//! - Reads return rows in ascending `id` (insertion) order.
//! - Writes with a `team_id` that names no team fail on the foreign key.

use crate::model::pilot::{NewPilot, Pilot, PilotId};
use crate::model::team::TeamId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::ensure_table_ready;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PILOT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    car_number,
    wins,
    team_id
FROM pilot";

const PILOT_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "car_number",
    "wins",
    "team_id",
];

/// Repository interface for pilot records.
pub trait PilotRepository {
    /// Inserts one pilot and returns it with its assigned id.
    fn create_pilot(&self, pilot: &NewPilot) -> RepoResult<Pilot>;
    /// Loads one pilot by id.
    fn get_pilot(&self, id: PilotId) -> RepoResult<Option<Pilot>>;
    /// Lists every pilot in insertion order.
    fn list_pilots(&self) -> RepoResult<Vec<Pilot>>;
    /// Replaces all fields of an existing pilot, including its team.
    fn update_pilot(&self, pilot: &Pilot) -> RepoResult<()>;
    /// Deletes one pilot by id.
    fn delete_pilot(&self, id: PilotId) -> RepoResult<()>;
    /// Deletes every pilot and returns how many rows were removed.
    fn delete_all_pilots(&self) -> RepoResult<usize>;
    /// Lists pilots owned by `team_id` in insertion order. Empty when none match.
    fn find_pilots_by_team_id(&self, team_id: TeamId) -> RepoResult<Vec<Pilot>>;
    /// Counts stored pilots.
    fn count_pilots(&self) -> RepoResult<u64>;
    /// Returns whether a pilot with `id` is stored.
    fn pilot_exists(&self, id: PilotId) -> RepoResult<bool>;
}

/// SQLite-backed pilot repository.
pub struct SqlitePilotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePilotRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "pilot", PILOT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PilotRepository for SqlitePilotRepository<'_> {
    fn create_pilot(&self, pilot: &NewPilot) -> RepoResult<Pilot> {
        self.conn.execute(
            "INSERT INTO pilot (
                first_name,
                last_name,
                car_number,
                wins,
                team_id
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                pilot.first_name.as_str(),
                pilot.last_name.as_str(),
                pilot.car_number,
                pilot.wins,
                pilot.team_id,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "event=pilot_create module=repo status=ok pilot_id={} team_id={}",
            id, pilot.team_id
        );
        Ok(Pilot::from_new(id, pilot.clone()))
    }

    fn get_pilot(&self, id: PilotId) -> RepoResult<Option<Pilot>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PILOT_SELECT_SQL} WHERE id = ?1;"))?;
        let pilot = stmt.query_row([id], parse_pilot_row).optional()?;
        Ok(pilot)
    }

    fn list_pilots(&self) -> RepoResult<Vec<Pilot>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PILOT_SELECT_SQL} ORDER BY id ASC;"))?;
        let pilots = stmt
            .query_map([], parse_pilot_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pilots)
    }

    fn update_pilot(&self, pilot: &Pilot) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE pilot
             SET
                first_name = ?1,
                last_name = ?2,
                car_number = ?3,
                wins = ?4,
                team_id = ?5
             WHERE id = ?6;",
            params![
                pilot.first_name.as_str(),
                pilot.last_name.as_str(),
                pilot.car_number,
                pilot.wins,
                pilot.team_id,
                pilot.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::PilotNotFound(pilot.id));
        }

        Ok(())
    }

    fn delete_pilot(&self, id: PilotId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM pilot WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::PilotNotFound(id));
        }

        debug!("event=pilot_delete module=repo status=ok pilot_id={id}");
        Ok(())
    }

    fn delete_all_pilots(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM pilot;", [])?;
        debug!("event=pilot_delete_all module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn find_pilots_by_team_id(&self, team_id: TeamId) -> RepoResult<Vec<Pilot>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PILOT_SELECT_SQL}
             WHERE team_id = ?1
             ORDER BY id ASC;"
        ))?;
        let pilots = stmt
            .query_map([team_id], parse_pilot_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pilots)
    }

    fn count_pilots(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM pilot;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn pilot_exists(&self, id: PilotId) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM pilot WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

fn parse_pilot_row(row: &Row<'_>) -> rusqlite::Result<Pilot> {
    Ok(Pilot {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        car_number: row.get("car_number")?,
        wins: row.get("wins")?,
        team_id: row.get("team_id")?,
    })
}
