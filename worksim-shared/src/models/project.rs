//! Project model
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE projects (
//!     project_id   TEXT PRIMARY KEY,
//!     org_id       TEXT NOT NULL REFERENCES organizations(org_id) ON DELETE CASCADE,
//!     team_id      TEXT NOT NULL REFERENCES teams(team_id) ON DELETE CASCADE,
//!     name         TEXT NOT NULL,
//!     description  TEXT,
//!     project_type TEXT NOT NULL,
//!     start_date   TEXT,
//!     end_date     TEXT
//! );
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use std::fmt;
use uuid::Uuid;

/// Kind of work a project tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    ProductDev,
    Marketing,
    Operations,
}

impl ProjectType {
    /// Converts type to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::ProductDev => "product_dev",
            ProjectType::Marketing => "marketing",
            ProjectType::Operations => "operations",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project owned by a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub org_id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub start_date: NaiveDate,

    /// Always after `start_date`
    pub end_date: NaiveDate,
}

impl Project {
    /// Inserts the project row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO projects
            (project_id, org_id, team_id, name, description, project_type, start_date, end_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.org_id.to_string())
        .bind(self.team_id.to_string())
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.project_type.as_str())
        .bind(self.start_date)
        .bind(self.end_date)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_as_str() {
        assert_eq!(ProjectType::ProductDev.as_str(), "product_dev");
        assert_eq!(ProjectType::Marketing.as_str(), "marketing");
        assert_eq!(ProjectType::Operations.as_str(), "operations");
    }

    #[test]
    fn test_project_type_serde_matches_storage() {
        for ty in [ProjectType::ProductDev, ProjectType::Marketing, ProjectType::Operations] {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }
}
