//! Error type shared by the team and pilot repositories.

use crate::db::DbError;
use crate::model::pilot::PilotId;
use crate::model::team::TeamId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for team/pilot persistence and query operations.
///
/// Lookups that match nothing are not errors; they return `None` or an empty
/// `Vec`. `*NotFound` is reserved for writes that target a specific id.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error, surfaced unchanged.
    Db(DbError),
    /// Update/delete targeted a team id that is not stored.
    TeamNotFound(TeamId),
    /// Update/delete targeted a pilot id that is not stored.
    PilotNotFound(PilotId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns `true` for SQLite constraint failures, such as deleting a team
    /// that still owns pilots.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::TeamNotFound(id) => write!(f, "team not found: {id}"),
            Self::PilotNotFound(id) => write!(f, "pilot not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::TeamNotFound(_) => None,
            Self::PilotNotFound(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
