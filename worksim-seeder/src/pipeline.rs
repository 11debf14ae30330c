//! Seeding pipeline
//!
//! Runs every stage in order against one connection inside one transaction:
//!
//! ```text
//! reset file → pool → schema → BEGIN
//!   ├─> identity    (organization, teams, users)
//!   ├─> projects    (projects, sections)
//!   ├─> tasks
//!   └─> annotations (tags, custom fields, comments)
//! COMMIT → counts → close
//! ```
//!
//! Any error drops the open transaction, so a failed run commits nothing.
//!
//! # Example
//!
//! ```no_run
//! use worksim_seeder::pipeline;
//! use worksim_shared::config::SeedConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SeedConfig {
//!     num_teams: 2,
//!     num_users: 20,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let summary = pipeline::run(&config).await?;
//! println!("{} tasks written", summary.tasks);
//! # Ok(())
//! # }
//! ```

use crate::generators::{annotations, identity, projects, tasks};
use chrono::{DateTime, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::SqliteConnection;
use tracing::info;
use worksim_shared::config::SeedConfig;
use worksim_shared::db::pool::{close_pool, create_pool, reset_database_file, DatabaseConfig};
use worksim_shared::db::schema::{apply_schema, count_rows};
use worksim_shared::error::SeedResult;

/// Row counts of a finished run, read back from the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub organizations: i64,
    pub teams: i64,
    pub users: i64,
    pub team_memberships: i64,
    pub projects: i64,
    pub sections: i64,
    pub tasks: i64,
    pub tags: i64,
    pub task_tags: i64,
    pub custom_field_definitions: i64,
    pub custom_field_values: i64,
    pub comments: i64,
}

impl SeedSummary {
    /// Counts every table of the schema
    pub async fn collect(conn: &mut SqliteConnection) -> Result<Self, sqlx::Error> {
        Ok(Self {
            organizations: count_rows(conn, "organizations").await?,
            teams: count_rows(conn, "teams").await?,
            users: count_rows(conn, "users").await?,
            team_memberships: count_rows(conn, "team_memberships").await?,
            projects: count_rows(conn, "projects").await?,
            sections: count_rows(conn, "sections").await?,
            tasks: count_rows(conn, "tasks").await?,
            tags: count_rows(conn, "tags").await?,
            task_tags: count_rows(conn, "task_tags").await?,
            custom_field_definitions: count_rows(conn, "custom_field_definitions").await?,
            custom_field_values: count_rows(conn, "custom_field_values").await?,
            comments: count_rows(conn, "comments").await?,
        })
    }
}

/// Runs the pipeline with a random source built from `config.seed`
///
/// Without a seed the source comes from OS entropy and every run differs.
pub async fn run(config: &SeedConfig) -> SeedResult<SeedSummary> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let now = Utc::now().trunc_subsecs(0);
    run_with_rng(config, &mut rng, now).await
}

/// Runs the pipeline with an injected random source and clock
pub async fn run_with_rng<R: Rng + ?Sized>(
    config: &SeedConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SeedResult<SeedSummary> {
    config.validate()?;

    reset_database_file(&config.database_path)?;
    let pool = create_pool(&DatabaseConfig::new(&config.database_path)).await?;

    let result = seed(&pool, config, rng, now).await;
    close_pool(pool).await;

    let summary = result?;
    info!(
        path = %config.database_path.display(),
        tasks = summary.tasks,
        comments = summary.comments,
        "Seeding complete"
    );
    Ok(summary)
}

async fn seed<R: Rng + ?Sized>(
    pool: &SqlitePool,
    config: &SeedConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SeedResult<SeedSummary> {
    // The pool holds a single connection; release it before BEGIN
    {
        let mut conn = pool.acquire().await?;
        apply_schema(&mut *conn).await?;
    }

    let mut tx = pool.begin().await?;

    let org_id = identity::generate_organization(&mut *tx, rng, config).await?;
    let teams = identity::generate_teams(&mut *tx, rng, org_id, config).await?;
    let users = identity::generate_users(&mut *tx, rng, org_id, &teams, config).await?;

    let projects =
        projects::generate_projects(&mut *tx, rng, org_id, &teams, config, now.date_naive()).await?;
    let sections = projects::generate_sections(&mut *tx, rng, &projects).await?;

    let tasks = tasks::generate_tasks(&mut *tx, rng, &projects, &sections, &users, config, now).await?;

    annotations::generate_comments_and_metadata(&mut *tx, rng, &tasks, org_id, &users, now).await?;

    let summary = SeedSummary::collect(&mut *tx).await?;
    tx.commit().await?;

    Ok(summary)
}
