//! Section model
//!
//! Sections are the ordered workflow columns of a project. Each one is
//! tagged with the [`WorkflowStage`] it represents, so placement logic never
//! has to match on display names.
//!
//! # Layouts
//!
//! ```text
//! product_dev:  Backlog  → In Progress   → In Review → Done
//! marketing:    Planned  → In Production → Scheduled → Launched
//! operations:   To Do    → In Progress   → Blocked   → Completed
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE sections (
//!     section_id  TEXT PRIMARY KEY,
//!     project_id  TEXT NOT NULL REFERENCES projects(project_id) ON DELETE CASCADE,
//!     name        TEXT NOT NULL,
//!     position    INTEGER NOT NULL,
//!     stage       TEXT NOT NULL,
//!     UNIQUE (project_id, position)
//! );
//! ```

use super::project::ProjectType;
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Number of sections every project gets
pub const SECTIONS_PER_PROJECT: usize = 4;

/// Workflow stage a section stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Work not started
    Todo,

    /// Work under way, in review, scheduled or blocked
    InProgress,

    /// Work finished
    Done,
}

impl WorkflowStage {
    /// Converts stage to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Todo => "todo",
            WorkflowStage::InProgress => "in_progress",
            WorkflowStage::Done => "done",
        }
    }
}

/// Ordered `(name, stage)` columns for a project type
pub fn layout_for(project_type: ProjectType) -> [(&'static str, WorkflowStage); SECTIONS_PER_PROJECT] {
    use WorkflowStage::*;

    match project_type {
        ProjectType::ProductDev => [
            ("Backlog", Todo),
            ("In Progress", InProgress),
            ("In Review", InProgress),
            ("Done", Done),
        ],
        ProjectType::Marketing => [
            ("Planned", Todo),
            ("In Production", InProgress),
            ("Scheduled", InProgress),
            ("Launched", Done),
        ],
        ProjectType::Operations => [
            ("To Do", Todo),
            ("In Progress", InProgress),
            ("Blocked", InProgress),
            ("Completed", Done),
        ],
    }
}

/// Workflow column of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,

    /// 0-based, contiguous within a project
    pub position: i64,

    pub stage: WorkflowStage,
}

impl Section {
    /// Inserts the section row
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO sections (section_id, project_id, name, position, stage)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.project_id.to_string())
        .bind(&self.name)
        .bind(self.position)
        .bind(self.stage.as_str())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
