//! Common test utilities for pipeline integration tests
//!
//! Every context seeds its own throwaway SQLite file inside a temp
//! directory, using a fixed seed and clock so runs are reproducible.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;
use worksim_seeder::pipeline::{run_with_rng, SeedSummary};
use worksim_shared::config::SeedConfig;
use worksim_shared::db::pool::{create_pool, DatabaseConfig};

/// Fixed clock used by the tests (a Wednesday)
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
}

/// Small configuration writing into `dir`
pub fn small_config(dir: &TempDir) -> SeedConfig {
    SeedConfig {
        num_teams: 4,
        num_users: 40,
        projects_per_team: 2,
        tasks_per_project: 60,
        database_path: dir.path().join("output").join("worksim.sqlite"),
        ..Default::default()
    }
}

/// Configuration large enough for frequency checks (3,000 tasks)
pub fn large_config(dir: &TempDir) -> SeedConfig {
    SeedConfig {
        num_teams: 5,
        num_users: 400,
        projects_per_team: 4,
        tasks_per_project: 150,
        database_path: dir.path().join("large.sqlite"),
        ..Default::default()
    }
}

/// Seeded dataset plus a pool to query it
pub struct TestContext {
    pub dir: TempDir,
    pub config: SeedConfig,
    pub summary: SeedSummary,
    pub pool: SqlitePool,
}

impl TestContext {
    /// Seeds a dataset with `config` (its path is used as-is)
    pub async fn seed(dir: TempDir, config: SeedConfig, seed: u64) -> anyhow::Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let summary = run_with_rng(&config, &mut rng, fixed_now()).await?;
        let pool = create_pool(&DatabaseConfig::new(&config.database_path)).await?;

        Ok(Self {
            dir,
            config,
            summary,
            pool,
        })
    }

    /// Seeds the default small dataset
    pub async fn small(seed: u64) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let config = small_config(&dir);
        Self::seed(dir, config, seed).await
    }

    /// Seeds the frequency-check dataset
    pub async fn large(seed: u64) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let config = large_config(&dir);
        Self::seed(dir, config, seed).await
    }

    /// Share of `part` in `whole`
    pub async fn ratio(&self, part: &str, whole: &str) -> f64 {
        self.count(part).await as f64 / self.count(whole).await as f64
    }

    pub fn path(&self) -> PathBuf {
        self.config.database_path.clone()
    }

    pub async fn count(&self, sql: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(sql)
            .fetch_one(&self.pool)
            .await
            .expect("count query failed");
        count
    }
}
