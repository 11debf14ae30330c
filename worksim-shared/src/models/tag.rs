//! Tag model and task associations
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tags (
//!     tag_id      TEXT PRIMARY KEY,
//!     org_id      TEXT NOT NULL REFERENCES organizations(org_id) ON DELETE CASCADE,
//!     name        TEXT NOT NULL
//! );
//!
//! CREATE TABLE task_tags (
//!     task_id     TEXT NOT NULL REFERENCES tasks(task_id) ON DELETE CASCADE,
//!     tag_id      TEXT NOT NULL REFERENCES tags(tag_id) ON DELETE CASCADE,
//!     PRIMARY KEY (task_id, tag_id)
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Organization-scoped label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
}

impl Tag {
    /// Inserts the tag row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO tags (tag_id, org_id, name) VALUES (?, ?, ?)")
            .bind(self.id.to_string())
            .bind(self.org_id.to_string())
            .bind(&self.name)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}

/// Tag attached to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTag {
    pub task_id: Uuid,
    pub tag_id: Uuid,
}

impl TaskTag {
    /// Attaches the tag, ignoring a pair that already exists
    ///
    /// Returns whether a row was written.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?, ?)")
            .bind(self.task_id.to_string())
            .bind(self.tag_id.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
