use pilotos_core::db::migrations::latest_version;
use pilotos_core::db::open_db_in_memory;
use pilotos_core::{
    NewPilot, NewTeam, PilotRepository, RepoError, SqlitePilotRepository, SqliteTeamRepository,
    Team, TeamRepository,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let team = create_team(&conn, "Mercedes");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let created = repo
        .create_pilot(&NewPilot::new("Lewis", "Hamilton", 44, 103, team.id))
        .unwrap();
    let loaded = repo.get_pilot(created.id).unwrap().unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.first_name, "Lewis");
    assert_eq!(loaded.last_name, "Hamilton");
    assert_eq!(loaded.car_number, 44);
    assert_eq!(loaded.wins, 103);
    assert_eq!(loaded.team_id, team.id);
}

#[test]
fn create_with_unknown_team_fails_on_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let err = repo
        .create_pilot(&NewPilot::new("Nobody", "Known", 99, 0, 12345))
        .unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(repo.count_pilots().unwrap(), 0);
}

#[test]
fn get_missing_pilot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    assert!(repo.get_pilot(7).unwrap().is_none());
    assert!(!repo.pilot_exists(7).unwrap());
}

#[test]
fn list_returns_pilots_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let team = create_team(&conn, "Red Bull");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let first = repo
        .create_pilot(&NewPilot::new("Sergio", "Perez", 11, 6, team.id))
        .unwrap();
    let second = repo
        .create_pilot(&NewPilot::new("Max", "Verstappen", 1, 54, team.id))
        .unwrap();

    assert_eq!(repo.list_pilots().unwrap(), vec![first, second]);
}

#[test]
fn update_existing_pilot_can_move_team() {
    let conn = open_db_in_memory().unwrap();
    let mercedes = create_team(&conn, "Mercedes");
    let ferrari = create_team(&conn, "Ferrari");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let mut pilot = repo
        .create_pilot(&NewPilot::new("Lewis", "Hamilton", 44, 103, mercedes.id))
        .unwrap();
    pilot.team_id = ferrari.id;
    pilot.wins = 105;
    repo.update_pilot(&pilot).unwrap();

    let loaded = repo.get_pilot(pilot.id).unwrap().unwrap();
    assert_eq!(loaded.team_id, ferrari.id);
    assert_eq!(loaded.wins, 105);
    assert!(repo.find_pilots_by_team_id(mercedes.id).unwrap().is_empty());
}

#[test]
fn update_to_unknown_team_fails_on_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let team = create_team(&conn, "Mercedes");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let mut pilot = repo
        .create_pilot(&NewPilot::new("George", "Russell", 63, 1, team.id))
        .unwrap();
    pilot.team_id = team.id + 100;

    let err = repo.update_pilot(&pilot).unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert_eq!(repo.get_pilot(pilot.id).unwrap().unwrap().team_id, team.id);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let team = create_team(&conn, "Mercedes");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let pilot = repo
        .create_pilot(&NewPilot::new("George", "Russell", 63, 1, team.id))
        .unwrap();
    repo.delete_pilot(pilot.id).unwrap();

    let err = repo.update_pilot(&pilot).unwrap_err();
    assert!(matches!(err, RepoError::PilotNotFound(id) if id == pilot.id));
}

#[test]
fn delete_missing_pilot_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let err = repo.delete_pilot(3).unwrap_err();
    assert!(matches!(err, RepoError::PilotNotFound(3)));
}

#[test]
fn find_by_team_id_filters_and_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mercedes = create_team(&conn, "Mercedes");
    let red_bull = create_team(&conn, "Red Bull");
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    let verstappen = repo
        .create_pilot(&NewPilot::new("Max", "Verstappen", 1, 54, red_bull.id))
        .unwrap();
    repo.create_pilot(&NewPilot::new("Lewis", "Hamilton", 44, 103, mercedes.id))
        .unwrap();
    let perez = repo
        .create_pilot(&NewPilot::new("Sergio", "Perez", 11, 6, red_bull.id))
        .unwrap();

    let found = repo.find_pilots_by_team_id(red_bull.id).unwrap();
    assert_eq!(found, vec![verstappen, perez]);
}

#[test]
fn find_by_unknown_team_id_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePilotRepository::try_new(&conn).unwrap();

    assert!(repo.find_pilots_by_team_id(999).unwrap().is_empty());
}

#[test]
fn delete_all_pilots_then_teams_empties_both_tables() {
    let conn = open_db_in_memory().unwrap();
    let team = create_team(&conn, "Mercedes");
    let pilots = SqlitePilotRepository::try_new(&conn).unwrap();
    let teams = SqliteTeamRepository::try_new(&conn).unwrap();

    pilots
        .create_pilot(&NewPilot::new("Lewis", "Hamilton", 44, 103, team.id))
        .unwrap();
    pilots
        .create_pilot(&NewPilot::new("George", "Russell", 63, 1, team.id))
        .unwrap();

    assert_eq!(pilots.delete_all_pilots().unwrap(), 2);
    assert_eq!(teams.delete_all_teams().unwrap(), 1);
    assert_eq!(pilots.count_pilots().unwrap(), 0);
    assert_eq!(teams.count_teams().unwrap(), 0);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePilotRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_pilot_table_missing_team_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE pilot (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            car_number INTEGER NOT NULL,
            wins INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqlitePilotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "pilot",
            column: "team_id"
        })
    ));
}

fn create_team(conn: &Connection, name: &str) -> Team {
    SqliteTeamRepository::try_new(conn)
        .unwrap()
        .create_team(&NewTeam::new(name, "Somewhere", 2000))
        .unwrap()
}
