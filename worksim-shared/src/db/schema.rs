//! Schema loader
//!
//! The DDL lives in `schema.sql` at the crate root and is compiled into the
//! binary. It is applied once to a freshly created file; running it against
//! a store that already has the tables fails, which aborts the run before
//! any data is written.

use sqlx::{Executor, SqliteConnection};
use tracing::{debug, info, warn};

/// The complete DDL script
pub const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Tables created by [`SCHEMA_SQL`], in foreign-key dependency order
pub const TABLES: [&str; 12] = [
    "organizations",
    "teams",
    "users",
    "team_memberships",
    "projects",
    "sections",
    "tasks",
    "tags",
    "task_tags",
    "custom_field_definitions",
    "custom_field_values",
    "comments",
];

/// Applies the embedded schema script
///
/// # Errors
///
/// Returns an error if any statement of the script fails (malformed DDL or
/// tables already present).
pub async fn apply_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    info!("Applying database schema");

    if let Err(e) = (&mut *conn).execute(SCHEMA_SQL).await {
        warn!("Schema application failed: {}", e);
        return Err(e);
    }

    let tables = table_names(conn).await?;
    info!(tables = tables.len(), "Database schema applied");
    Ok(())
}

/// Lists user tables present in the store, sorted by name
pub async fn table_names(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ORDER BY name
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    debug!(?names, "Listed tables");
    Ok(names)
}

/// Counts the rows of one of the schema's tables
///
/// Only names listed in [`TABLES`] are accepted.
pub async fn count_rows(conn: &mut SqliteConnection, table: &str) -> Result<i64, sqlx::Error> {
    if !TABLES.contains(&table) {
        return Err(sqlx::Error::Protocol(format!("unknown table {}", table)));
    }

    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}
