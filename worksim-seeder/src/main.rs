//! # worksim Seeder
//!
//! Writes a synthetic project-management dataset to a SQLite file.
//!
//! Takes no arguments; configuration comes from environment variables (or a
//! `.env` file), see `worksim_shared::config`.
//!
//! ## Usage
//!
//! ```bash
//! NUM_TEAMS=5 NUM_USERS=40 cargo run -p worksim-seeder
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worksim_seeder::pipeline;
use worksim_shared::config::SeedConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worksim_seeder=info,worksim_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("worksim seeder v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = SeedConfig::from_env()?;
    tracing::info!(
        org = %config.org_name,
        teams = config.num_teams,
        users = config.num_users,
        projects_per_team = config.projects_per_team,
        tasks_per_project = config.tasks_per_project,
        months = config.date_range_months,
        "Loaded configuration"
    );

    let summary = pipeline::run(&config).await?;
    tracing::info!(summary = %serde_json::to_string(&summary)?, "Dataset written");

    Ok(())
}
