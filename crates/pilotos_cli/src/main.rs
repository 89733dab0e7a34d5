//! `pilotos` command-line entry point.
//!
//! # Responsibility
//! - Open (and migrate) a team/pilot database from flags or environment.
//! - Seed the demo dataset only when asked via `pilotos seed`.
//! - Print teams and pilots as text or JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pilotos_core::db::{open_db, open_db_in_memory};
use pilotos_core::{
    default_log_level, init_logging, seed_demo_data, LogTarget, Pilot, PilotRepository,
    RosterService, SqlitePilotRepository, SqliteTeamRepository, TeamId, TeamRoster,
};
use rusqlite::Connection;
use serde::Serialize;
use std::path::PathBuf;

/// Pilotos - racing teams and their pilots
#[derive(Parser, Debug)]
#[command(name = "pilotos")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SQLite database file. An in-memory database is used when omitted.
    #[arg(long, global = true, env = "PILOTOS_DB")]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "PILOTOS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when omitted.
    #[arg(long, global = true, env = "PILOTOS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Delete all teams and pilots, then insert the demo dataset.
    Seed,
    /// List every team with its pilots.
    Teams,
    /// Show one team, matched by exact name, with its pilots.
    Team {
        /// Team name (case-sensitive).
        name: String,
    },
    /// List pilots, optionally only those of one team.
    Pilots {
        /// Only pilots owned by this team id.
        #[arg(long)]
        team_id: Option<TeamId>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Teams => "teams",
            Self::Team { .. } => "team",
            Self::Pilots { .. } => "pilots",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let target = match &cli.log_dir {
        Some(dir) => LogTarget::Directory(dir.clone()),
        None => LogTarget::Stderr,
    };
    init_logging(&level, target)
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;

    let mut conn = match &cli.db {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };

    info!(
        "event=cli_command module=cli status=start command={} db_mode={}",
        cli.command.name(),
        if cli.db.is_some() { "file" } else { "memory" }
    );

    match &cli.command {
        Command::Seed => {
            let summary = seed_demo_data(&mut conn).context("failed to seed demo data")?;
            if cli.json {
                print_json(&summary)?;
            } else {
                println!(
                    "removed {} pilots and {} teams; inserted {} teams and {} pilots",
                    summary.removed_pilots,
                    summary.removed_teams,
                    summary.teams.len(),
                    summary.pilots.len()
                );
            }
        }
        Command::Teams => {
            let rosters = roster_service(&conn)?
                .list_rosters()
                .context("failed to list teams")?;
            if cli.json {
                print_json(&rosters)?;
            } else {
                rosters.iter().for_each(print_roster);
            }
        }
        Command::Team { name } => {
            let Some(roster) = roster_service(&conn)?
                .team_roster(name)
                .context("failed to look up team")?
            else {
                bail!("team not found: {name}");
            };
            if cli.json {
                print_json(&roster)?;
            } else {
                print_roster(&roster);
            }
        }
        Command::Pilots { team_id } => {
            let repo = SqlitePilotRepository::try_new(&conn)?;
            let pilots = match team_id {
                Some(team_id) => repo.find_pilots_by_team_id(*team_id)?,
                None => repo.list_pilots()?,
            };
            if cli.json {
                print_json(&pilots)?;
            } else {
                pilots.iter().for_each(|pilot| println!("{}", pilot_line(pilot)));
            }
        }
    }

    Ok(())
}

fn roster_service(
    conn: &Connection,
) -> Result<RosterService<SqliteTeamRepository<'_>, SqlitePilotRepository<'_>>> {
    Ok(RosterService::new(
        SqliteTeamRepository::try_new(conn)?,
        SqlitePilotRepository::try_new(conn)?,
    ))
}

fn print_roster(roster: &TeamRoster) {
    println!(
        "#{} {} ({}, founded {})",
        roster.team.id, roster.team.name, roster.team.base_location, roster.team.founding_year
    );
    for pilot in &roster.pilots {
        println!("  {}", pilot_line(pilot));
    }
}

fn pilot_line(pilot: &Pilot) -> String {
    format!(
        "#{:<3} {} ({} wins, team {})",
        pilot.car_number,
        pilot.full_name(),
        pilot.wins,
        pilot.team_id
    )
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    println!("{text}");
    Ok(())
}
