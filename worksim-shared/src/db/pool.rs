//! SQLite connection pool management
//!
//! The seeder writes through exactly one connection, so the pool is capped
//! at a single connection with referential integrity switched on.
//!
//! # Example
//!
//! ```no_run
//! use worksim_shared::db::pool::{create_pool, reset_database_file, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatabaseConfig::new("output/worksim.sqlite");
//! reset_database_file(&config.path)?;
//!
//! let pool = create_pool(&config).await?;
//! let row: (i64,) = sqlx::query_as("SELECT ?")
//!     .bind(42i64)
//!     .fetch_one(&pool)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the store connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the SQLite file
    pub path: PathBuf,

    /// Maximum number of connections in the pool
    ///
    /// Default: 1 (the whole run is one transaction on one connection)
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    ///
    /// Default: 30 seconds
    pub connect_timeout_seconds: u64,

    /// Whether `PRAGMA foreign_keys` is enabled on every connection
    ///
    /// Default: true
    pub foreign_keys: bool,

    /// Create the file when it does not exist
    ///
    /// Default: true
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            max_connections: 1,
            connect_timeout_seconds: 30,
            foreign_keys: true,
            create_if_missing: true,
        }
    }
}

/// Deletes the store file (if any) and makes sure its directory exists
///
/// Every run starts from a clean slate; there is no append or merge mode.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be removed or the
/// parent directory cannot be created.
pub fn reset_database_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "Removed previous database file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No previous database file");
            Ok(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to remove database file");
            Err(e)
        }
    }
}

/// Creates and initializes the SQLite connection pool
///
/// Performs a health check before returning.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or created
/// - Health check fails
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        path = %config.path.display(),
        max_connections = config.max_connections,
        foreign_keys = config.foreign_keys,
        "Creating database connection pool"
    );

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing)
        .foreign_keys(config.foreign_keys);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect_with(options)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Executes a trivial query to verify the store responds
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        warn!("Database health check returned unexpected value: {}", result.0);
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Closes the pool, flushing the file to disk
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}
