//! Team record.

use serde::{Deserialize, Serialize};

/// Store-assigned team identifier (`team.id`).
pub type TeamId = i64;

/// Input for creating a team. The identifier is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub base_location: String,
    pub founding_year: i32,
}

impl NewTeam {
    pub fn new(
        name: impl Into<String>,
        base_location: impl Into<String>,
        founding_year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            base_location: base_location.into(),
            founding_year,
        }
    }
}

/// Persisted team row.
///
/// Names are looked up by exact match but are not unique in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub base_location: String,
    pub founding_year: i32,
}

impl Team {
    /// Attaches a store-assigned id to a creation input.
    pub fn from_new(id: TeamId, new: NewTeam) -> Self {
        Self {
            id,
            name: new.name,
            base_location: new.base_location,
            founding_year: new.founding_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewTeam, Team};

    #[test]
    fn from_new_keeps_all_fields() {
        let team = Team::from_new(7, NewTeam::new("Mercedes", "Brackley, UK", 1970));
        assert_eq!(team.id, 7);
        assert_eq!(team.name, "Mercedes");
        assert_eq!(team.base_location, "Brackley, UK");
        assert_eq!(team.founding_year, 1970);
    }
}
