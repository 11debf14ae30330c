//! Custom field definitions and values
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE custom_field_definitions (
//!     field_id     TEXT PRIMARY KEY,
//!     org_id       TEXT NOT NULL REFERENCES organizations(org_id) ON DELETE CASCADE,
//!     name         TEXT NOT NULL,
//!     field_type   TEXT NOT NULL,
//!     enum_options TEXT
//! );
//!
//! CREATE TABLE custom_field_values (
//!     task_id      TEXT NOT NULL REFERENCES tasks(task_id) ON DELETE CASCADE,
//!     field_id     TEXT NOT NULL REFERENCES custom_field_definitions(field_id) ON DELETE CASCADE,
//!     value_text   TEXT,
//!     value_number REAL,
//!     PRIMARY KEY (task_id, field_id)
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Value type of a custom field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// One of a fixed list of options
    Enum,

    /// Numeric value
    Number,
}

impl FieldType {
    /// Converts field type to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Enum => "enum",
            FieldType::Number => "number",
        }
    }
}

/// Organization-scoped custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldDefinition {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
    pub field_type: FieldType,

    /// Allowed options for enum fields (stored as a JSON array)
    pub enum_options: Option<Vec<String>>,
}

impl CustomFieldDefinition {
    /// Inserts the definition row
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Serialization` if the options cannot be encoded
    /// and `SeedError::Database` if the write fails.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> crate::error::SeedResult<()> {
        let options = match &self.enum_options {
            Some(options) => Some(serde_json::to_string(options)?),
            None => None,
        };

        sqlx::query(
            r#"
            INSERT INTO custom_field_definitions (field_id, org_id, name, field_type, enum_options)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.id.to_string())
        .bind(self.org_id.to_string())
        .bind(&self.name)
        .bind(self.field_type.as_str())
        .bind(options)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

/// Value of one custom field on one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub task_id: Uuid,
    pub field_id: Uuid,
    pub value_text: Option<String>,
    pub value_number: Option<f64>,
}

impl CustomFieldValue {
    /// Writes the value, replacing any previous value for the same pair
    pub async fn upsert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO custom_field_values (task_id, field_id, value_text, value_number)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(self.task_id.to_string())
        .bind(self.field_id.to_string())
        .bind(&self.value_text)
        .bind(self.value_number)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_as_str() {
        assert_eq!(FieldType::Enum.as_str(), "enum");
        assert_eq!(FieldType::Number.as_str(), "number");
    }

    #[test]
    fn test_enum_options_json_shape() {
        let options = vec!["P0".to_string(), "P1".to_string()];
        assert_eq!(serde_json::to_string(&options).unwrap(), r#"["P0","P1"]"#);
    }
}
