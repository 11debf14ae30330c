//! Team model
//!
//! Teams carry a functional category that drives project naming and types.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE teams (
//!     team_id     TEXT PRIMARY KEY,
//!     org_id      TEXT NOT NULL REFERENCES organizations(org_id) ON DELETE CASCADE,
//!     name        TEXT NOT NULL,
//!     function    TEXT NOT NULL,
//!     CONSTRAINT teams_function_check CHECK (
//!         function IN ('engineering', 'marketing', 'sales', 'operations')
//!     )
//! );
//! ```

use super::project::ProjectType;
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use std::fmt;
use uuid::Uuid;

/// Functional category of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamFunction {
    Engineering,
    Marketing,
    Sales,
    Operations,
}

impl TeamFunction {
    /// Converts function to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamFunction::Engineering => "engineering",
            TeamFunction::Marketing => "marketing",
            TeamFunction::Sales => "sales",
            TeamFunction::Operations => "operations",
        }
    }

    /// Project type every project of a team with this function gets
    ///
    /// Sales teams run operations-style projects.
    pub fn project_type(&self) -> ProjectType {
        match self {
            TeamFunction::Engineering => ProjectType::ProductDev,
            TeamFunction::Marketing => ProjectType::Marketing,
            TeamFunction::Sales | TeamFunction::Operations => ProjectType::Operations,
        }
    }
}

impl fmt::Display for TeamFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team belonging to the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
    pub function: TeamFunction,
}

impl Team {
    /// Inserts the team row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO teams (team_id, org_id, name, function)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.org_id.to_string())
        .bind(&self.name)
        .bind(self.function.as_str())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
