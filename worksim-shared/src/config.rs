//! Configuration for a seeding run
//!
//! The pipeline takes an explicit [`SeedConfig`]. The binary builds one from
//! environment variables; tests construct it directly.
//!
//! # Environment Variables
//!
//! - `ORG_NAME`: Organization display name (default: NimbusFlow Inc.)
//! - `ORG_DOMAIN`: Email domain for generated users (default: nimbusflow.com)
//! - `NUM_TEAMS`: Number of teams (default: 50)
//! - `NUM_USERS`: Number of users (default: 500)
//! - `PROJECTS_PER_TEAM`: Projects created for each team (default: 4)
//! - `TASKS_PER_PROJECT`: Tasks created for each project (default: 80)
//! - `DATE_RANGE_MONTHS`: Look-back window for task creation (default: 6)
//! - `DATABASE_PATH`: Output SQLite file (default: output/worksim.sqlite)
//! - `SEED`: Optional u64 seed for a reproducible run
//!
//! # Example
//!
//! ```no_run
//! use worksim_shared::config::SeedConfig;
//!
//! # fn example() -> Result<(), worksim_shared::error::SeedError> {
//! let config = SeedConfig::from_env()?;
//! config.validate()?;
//! println!("Seeding {} teams into {}", config.num_teams, config.database_path.display());
//! # Ok(())
//! # }
//! ```

use crate::error::{SeedError, SeedResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_ORG_NAME: &str = "NimbusFlow Inc.";
pub const DEFAULT_ORG_DOMAIN: &str = "nimbusflow.com";
pub const DEFAULT_DATABASE_PATH: &str = "output/worksim.sqlite";

/// Days counted per month of look-back window
pub const DAYS_PER_MONTH: i64 = 30;

/// Longest accepted look-back window (100 years)
pub const MAX_DATE_RANGE_MONTHS: u32 = 1200;

/// Complete configuration of a seeding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Organization display name
    pub org_name: String,

    /// Organization domain, also used for user emails
    pub org_domain: String,

    /// Number of teams to create
    pub num_teams: usize,

    /// Number of users to create
    pub num_users: usize,

    /// Projects created for every team
    pub projects_per_team: usize,

    /// Tasks created for every project
    pub tasks_per_project: usize,

    /// Look-back window for task creation timestamps, in months of 30 days
    pub date_range_months: u32,

    /// SQLite file the dataset is written to (deleted and recreated per run)
    pub database_path: PathBuf,

    /// Seed for the random source
    ///
    /// None = seeded from OS entropy, so every run differs
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            org_name: DEFAULT_ORG_NAME.to_string(),
            org_domain: DEFAULT_ORG_DOMAIN.to_string(),
            num_teams: 50,
            num_users: 500,
            projects_per_team: 4,
            tasks_per_project: 80,
            date_range_months: 6,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Loads configuration from environment variables
    ///
    /// A `.env` file in the working directory is honoured if present.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Config` if a numeric variable cannot be parsed.
    pub fn from_env() -> SeedResult<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> SeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            org_name: lookup("ORG_NAME").unwrap_or(defaults.org_name),
            org_domain: lookup("ORG_DOMAIN").unwrap_or(defaults.org_domain),
            num_teams: parse_var(&lookup, "NUM_TEAMS", defaults.num_teams)?,
            num_users: parse_var(&lookup, "NUM_USERS", defaults.num_users)?,
            projects_per_team: parse_var(&lookup, "PROJECTS_PER_TEAM", defaults.projects_per_team)?,
            tasks_per_project: parse_var(&lookup, "TASKS_PER_PROJECT", defaults.tasks_per_project)?,
            date_range_months: parse_var(&lookup, "DATE_RANGE_MONTHS", defaults.date_range_months)?,
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            seed: match lookup("SEED") {
                Some(raw) => Some(parse_value("SEED", &raw)?),
                None => None,
            },
        })
    }

    /// Checks the values the generators rely on
    ///
    /// Users need at least one team to join, and tasks need a non-empty
    /// window to be created in. The window is capped so every timestamp
    /// stays inside chrono's range.
    pub fn validate(&self) -> SeedResult<()> {
        if self.num_teams == 0 {
            return Err(SeedError::Config("NUM_TEAMS must be at least 1".to_string()));
        }
        if self.num_users == 0 {
            return Err(SeedError::Config("NUM_USERS must be at least 1".to_string()));
        }
        if self.date_range_months == 0 {
            return Err(SeedError::Config(
                "DATE_RANGE_MONTHS must be at least 1".to_string(),
            ));
        }
        if self.date_range_months > MAX_DATE_RANGE_MONTHS {
            return Err(SeedError::Config(format!(
                "DATE_RANGE_MONTHS must be at most {}, got {}",
                MAX_DATE_RANGE_MONTHS, self.date_range_months
            )));
        }
        self.total_tasks()?;
        if self.org_domain.trim().is_empty() {
            return Err(SeedError::Config("ORG_DOMAIN must not be empty".to_string()));
        }
        Ok(())
    }

    /// Number of tasks a run creates
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Config` if the product overflows `usize`.
    pub fn total_tasks(&self) -> SeedResult<usize> {
        self.num_teams
            .checked_mul(self.projects_per_team)
            .and_then(|projects| projects.checked_mul(self.tasks_per_project))
            .ok_or_else(|| {
                SeedError::Config(format!(
                    "NUM_TEAMS * PROJECTS_PER_TEAM * TASKS_PER_PROJECT overflows ({} * {} * {})",
                    self.num_teams, self.projects_per_team, self.tasks_per_project
                ))
            })
    }

    /// Length of the task look-back window in days
    pub fn window_days(&self) -> i64 {
        i64::from(self.date_range_months) * DAYS_PER_MONTH
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> SeedResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> SeedResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| SeedError::Config(format!("{} has invalid value {:?}", key, raw)))
}
