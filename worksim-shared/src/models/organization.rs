//! Organization model
//!
//! The root of every other entity. A run creates exactly one.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE organizations (
//!     org_id      TEXT PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     domain      TEXT NOT NULL
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Organization owning all generated data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization ID
    pub id: Uuid,

    /// Display name (e.g., "NimbusFlow Inc.")
    pub name: String,

    /// Email domain (e.g., "nimbusflow.com")
    pub domain: String,
}

impl Organization {
    /// Inserts the organization row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO organizations (org_id, name, domain) VALUES (?, ?, ?)")
            .bind(self.id.to_string())
            .bind(&self.name)
            .bind(&self.domain)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
