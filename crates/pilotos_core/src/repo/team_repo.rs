//! Team repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `team` table.
//! - Provide exact-name lookup as an explicit query.
//!
//! # Invariants
//! - Reads return rows in ascending `id` (insertion) order.
//! - Name matching is case-sensitive (SQLite `BINARY` collation).
//! - Deleting a team that still owns pilots fails with a constraint error and
//!   removes nothing.

use crate::model::team::{NewTeam, Team, TeamId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::ensure_table_ready;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const TEAM_SELECT_SQL: &str = "SELECT
    id,
    name,
    base_location,
    founding_year
FROM team";

const TEAM_COLUMNS: &[&str] = &["id", "name", "base_location", "founding_year"];

/// Repository interface for team records.
pub trait TeamRepository {
    /// Inserts one team and returns it with its assigned id.
    fn create_team(&self, team: &NewTeam) -> RepoResult<Team>;
    /// Loads one team by id.
    fn get_team(&self, id: TeamId) -> RepoResult<Option<Team>>;
    /// Lists every team in insertion order.
    fn list_teams(&self) -> RepoResult<Vec<Team>>;
    /// Replaces all fields of an existing team.
    fn update_team(&self, team: &Team) -> RepoResult<()>;
    /// Deletes one team by id.
    fn delete_team(&self, id: TeamId) -> RepoResult<()>;
    /// Deletes every team and returns how many rows were removed.
    fn delete_all_teams(&self) -> RepoResult<usize>;
    /// Returns the earliest-inserted team whose name equals `name` exactly.
    fn find_team_by_name(&self, name: &str) -> RepoResult<Option<Team>>;
    /// Counts stored teams.
    fn count_teams(&self) -> RepoResult<u64>;
    /// Returns whether a team with `id` is stored.
    fn team_exists(&self, id: TeamId) -> RepoResult<bool>;
}

/// SQLite-backed team repository.
pub struct SqliteTeamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "team", TEAM_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn create_team(&self, team: &NewTeam) -> RepoResult<Team> {
        self.conn.execute(
            "INSERT INTO team (
                name,
                base_location,
                founding_year
            ) VALUES (?1, ?2, ?3);",
            params![
                team.name.as_str(),
                team.base_location.as_str(),
                team.founding_year,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=team_create module=repo status=ok team_id={id}");
        Ok(Team::from_new(id, team.clone()))
    }

    fn get_team(&self, id: TeamId) -> RepoResult<Option<Team>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEAM_SELECT_SQL} WHERE id = ?1;"))?;
        let team = stmt.query_row([id], parse_team_row).optional()?;
        Ok(team)
    }

    fn list_teams(&self) -> RepoResult<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEAM_SELECT_SQL} ORDER BY id ASC;"))?;
        let teams = stmt
            .query_map([], parse_team_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(teams)
    }

    fn update_team(&self, team: &Team) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE team
             SET
                name = ?1,
                base_location = ?2,
                founding_year = ?3
             WHERE id = ?4;",
            params![
                team.name.as_str(),
                team.base_location.as_str(),
                team.founding_year,
                team.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::TeamNotFound(team.id));
        }

        Ok(())
    }

    fn delete_team(&self, id: TeamId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM team WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::TeamNotFound(id));
        }

        debug!("event=team_delete module=repo status=ok team_id={id}");
        Ok(())
    }

    fn delete_all_teams(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM team;", [])?;
        debug!("event=team_delete_all module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn find_team_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TEAM_SELECT_SQL}
             WHERE name = ?1
             ORDER BY id ASC
             LIMIT 1;"
        ))?;
        let team = stmt.query_row([name], parse_team_row).optional()?;
        Ok(team)
    }

    fn count_teams(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM team;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn team_exists(&self, id: TeamId) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM team WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

fn parse_team_row(row: &Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        base_location: row.get("base_location")?,
        founding_year: row.get("founding_year")?,
    })
}
