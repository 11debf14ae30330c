//! Comment model
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE comments (
//!     comment_id  TEXT PRIMARY KEY,
//!     task_id     TEXT NOT NULL REFERENCES tasks(task_id) ON DELETE CASCADE,
//!     user_id     TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
//!     body        TEXT NOT NULL,
//!     created_at  TEXT NOT NULL
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Comment left by a user on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub task_id: Uuid,

    /// Author
    pub user_id: Uuid,

    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Inserts the comment row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, task_id, user_id, body, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.task_id.to_string())
        .bind(self.user_id.to_string())
        .bind(&self.body)
        .bind(self.created_at)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
