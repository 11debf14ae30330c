//! Task model
//!
//! Tasks are the bulk of a dataset. A task sits in exactly one section of
//! its project and may point at a parent task of the same project.
//!
//! # Invariants
//!
//! - `completed == false` ⇒ `completed_at` is None
//! - `completed == true` ⇒ `completed_at >= created_at`
//! - `due_date` is never a Saturday or Sunday
//! - a parent task never has a parent itself (single-level nesting)
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     task_id        TEXT PRIMARY KEY,
//!     project_id     TEXT NOT NULL REFERENCES projects(project_id) ON DELETE CASCADE,
//!     section_id     TEXT NOT NULL REFERENCES sections(section_id) ON DELETE CASCADE,
//!     parent_task_id TEXT REFERENCES tasks(task_id) ON DELETE SET NULL,
//!     name           TEXT NOT NULL,
//!     description    TEXT,
//!     assignee_id    TEXT REFERENCES users(user_id) ON DELETE SET NULL,
//!     due_date       TEXT,
//!     created_at     TEXT NOT NULL,
//!     completed      INTEGER NOT NULL DEFAULT 0,
//!     completed_at   TEXT,
//!     priority       TEXT NOT NULL
//! );
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use std::fmt;
use uuid::Uuid;

/// Task priority, P0 being the most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];

    /// Converts priority to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work item inside a project section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Project this task belongs to
    pub project_id: Uuid,

    /// Section of the same project the task is placed in
    pub section_id: Uuid,

    /// Top-level task of the same project (None for top-level tasks)
    pub parent_task_id: Option<Uuid>,

    /// Human-readable task name
    pub name: String,

    /// Free-form description (None for tasks without one)
    pub description: Option<String>,

    /// Assigned user (None = unassigned)
    pub assignee_id: Option<Uuid>,

    /// Due date, never on a weekend
    pub due_date: Option<NaiveDate>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// Whether the task is finished
    pub completed: bool,

    /// When the task was finished (set iff `completed`)
    pub completed_at: Option<DateTime<Utc>>,

    pub priority: Priority,
}

impl Task {
    /// Inserts the task row
    ///
    /// # Errors
    ///
    /// Returns an error if the project, section, parent or assignee doesn't
    /// exist (foreign key violation) or the database write fails.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO tasks
            (task_id, project_id, section_id, parent_task_id, name, description,
             assignee_id, due_date, created_at, completed, completed_at, priority)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.project_id.to_string())
        .bind(self.section_id.to_string())
        .bind(self.parent_task_id.map(|id| id.to_string()))
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.assignee_id.map(|id| id.to_string()))
        .bind(self.due_date)
        .bind(self.created_at)
        .bind(self.completed)
        .bind(self.completed_at)
        .bind(self.priority.as_str())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: Uuid::nil(),
            project_id: Uuid::nil(),
            section_id: Uuid::nil(),
            parent_task_id: None,
            name: "Auth – Fix token refresh bug".to_string(),
            description: None,
            assignee_id: None,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap(),
            completed: false,
            completed_at: None,
            priority: Priority::P2,
        }
    }

    #[test]
    fn test_priority_as_str() {
        let names: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["P0", "P1", "P2", "P3"]);
        assert!(Priority::P0 < Priority::P3);
    }

    #[test]
    fn test_task_serializes_open_state() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(json["priority"], "P2");
        assert_eq!(json["completed"], false);
        assert!(json["completed_at"].is_null());
        assert!(json["due_date"].is_null());
    }
}
