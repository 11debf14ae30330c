//! User model
//!
//! Users belong to the organization and join teams through
//! `team_memberships`.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     user_id     TEXT PRIMARY KEY,
//!     org_id      TEXT NOT NULL REFERENCES organizations(org_id) ON DELETE CASCADE,
//!     name        TEXT NOT NULL,
//!     email       TEXT NOT NULL,
//!     title       TEXT,
//!     timezone    TEXT
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Organization member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,

    /// Organization the user belongs to
    pub org_id: Uuid,

    /// Display name ("First Last")
    pub name: String,

    /// Email derived as `first.last@domain`, lowercased
    ///
    /// Not unique: two users may share a name
    pub email: String,

    /// Job title
    pub title: String,

    /// IANA-style timezone name
    pub timezone: String,
}

impl User {
    /// Derives the email address for a name pair
    pub fn email_for(first: &str, last: &str, domain: &str) -> String {
        format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain)
    }

    /// Inserts the user row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, org_id, name, email, title, timezone)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.org_id.to_string())
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.title)
        .bind(&self.timezone)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
