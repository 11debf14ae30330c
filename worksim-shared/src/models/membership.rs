//! Team membership model
//!
//! Many-to-many relationship between users and teams.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE team_memberships (
//!     team_id     TEXT NOT NULL REFERENCES teams(team_id) ON DELETE CASCADE,
//!     user_id     TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
//!     PRIMARY KEY (team_id, user_id)
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// User-team relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub team_id: Uuid,
    pub user_id: Uuid,
}

impl TeamMembership {
    /// Inserts the membership row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Membership already exists (primary key violation)
    /// - Team or user doesn't exist (foreign key violation)
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO team_memberships (team_id, user_id) VALUES (?, ?)")
            .bind(self.team_id.to_string())
            .bind(self.user_id.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
