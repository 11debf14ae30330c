//! Annotation stage: tags, custom fields, comments
//!
//! Tags and the two custom field definitions are created once per run.
//! Every task then gets both custom field values; comments and tags only
//! land on a sampled subset.

use super::vocab::{COMMENT_BODIES, TAG_NAMES};
use super::{pick, TaskRef, UserRef};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqliteConnection;
use tracing::info;
use uuid::Uuid;
use worksim_shared::error::SeedResult;
use worksim_shared::models::comment::Comment;
use worksim_shared::models::custom_field::{CustomFieldDefinition, CustomFieldValue, FieldType};
use worksim_shared::models::new_id;
use worksim_shared::models::tag::{Tag, TaskTag};
use worksim_shared::models::task::Priority;
use worksim_shared::sampling::WeightedTable;

/// Share of tasks that receive comments
pub const COMMENTED_TASK_PROBABILITY: f64 = 0.4;

/// Comments per commented task
pub const COMMENTS_PER_TASK: std::ops::RangeInclusive<usize> = 1..=5;

/// How far back comments are dated (days)
pub const COMMENT_WINDOW_DAYS: i64 = 60;

/// Share of tasks that go through tag sampling
pub const TAGGED_TASK_PROBABILITY: f64 = 0.7;

/// Effort estimate bounds
pub const EFFORT_RANGE: std::ops::RangeInclusive<i64> = 1..=8;

/// Custom field definitions of a run
#[derive(Debug, Clone)]
pub struct CustomFields {
    /// Enum field, never filled in
    pub priority: CustomFieldDefinition,

    /// Number field, always filled in
    pub effort: CustomFieldDefinition,
}

impl CustomFields {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, org_id: Uuid) -> Self {
        Self {
            priority: CustomFieldDefinition {
                id: new_id(rng),
                org_id,
                name: "Priority".to_string(),
                field_type: FieldType::Enum,
                enum_options: Some(Priority::ALL.iter().map(|p| p.as_str().to_string()).collect()),
            },
            effort: CustomFieldDefinition {
                id: new_id(rng),
                org_id,
                name: "Effort".to_string(),
                field_type: FieldType::Number,
                enum_options: None,
            },
        }
    }

    /// Both values for one task
    pub fn values_for<R: Rng + ?Sized>(&self, rng: &mut R, task_id: Uuid) -> [CustomFieldValue; 2] {
        [
            CustomFieldValue {
                task_id,
                field_id: self.priority.id,
                value_text: None,
                value_number: None,
            },
            CustomFieldValue {
                task_id,
                field_id: self.effort.id,
                value_text: None,
                value_number: Some(rng.gen_range(EFFORT_RANGE) as f64),
            },
        ]
    }
}

/// Creates tags and custom fields, then annotates every task
pub async fn generate_comments_and_metadata<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    tasks: &[TaskRef],
    org_id: Uuid,
    users: &[UserRef],
    now: DateTime<Utc>,
) -> SeedResult<()> {
    let mut comments = 0usize;
    let mut task_tags = 0usize;
    let tag_count = WeightedTable::uniform(vec![0usize, 1, 2, 3])?;

    let mut tags = Vec::with_capacity(TAG_NAMES.len());
    for name in TAG_NAMES {
        let tag = Tag {
            id: new_id(rng),
            org_id,
            name: name.to_string(),
        };
        tag.insert(conn).await?;
        tags.push(tag.id);
    }

    let fields = CustomFields::new(rng, org_id);
    fields.priority.insert(conn).await?;
    fields.effort.insert(conn).await?;

    for task in tasks {
        if rng.gen_bool(COMMENTED_TASK_PROBABILITY) {
            for _ in 0..rng.gen_range(COMMENTS_PER_TASK) {
                let Some(author) = users.choose(rng) else {
                    break;
                };

                let comment = Comment {
                    id: new_id(rng),
                    task_id: task.id,
                    user_id: author.id,
                    body: pick(rng, COMMENT_BODIES).to_string(),
                    created_at: now - Duration::days(rng.gen_range(0..=COMMENT_WINDOW_DAYS)),
                };
                comment.insert(conn).await?;
                comments += 1;
            }
        }

        for value in fields.values_for(rng, task.id) {
            value.upsert(conn).await?;
        }

        if rng.gen_bool(TAGGED_TASK_PROBABILITY) {
            let k = tag_count.sample(rng);
            let chosen: Vec<Uuid> = tags.choose_multiple(rng, k).copied().collect();
            for tag_id in chosen {
                let link = TaskTag {
                    task_id: task.id,
                    tag_id,
                };
                if link.insert(conn).await? {
                    task_tags += 1;
                }
            }
        }
    }

    info!(
        tags = tags.len(),
        comments,
        custom_field_values = tasks.len() * 2,
        task_tags,
        "Created annotations"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_custom_fields_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let fields = CustomFields::new(&mut rng, Uuid::new_v4());

        assert_eq!(fields.priority.name, "Priority");
        assert_eq!(fields.priority.field_type, FieldType::Enum);
        assert_eq!(
            fields.priority.enum_options.as_deref(),
            Some(&["P0".to_string(), "P1".to_string(), "P2".to_string(), "P3".to_string()][..])
        );
        assert_eq!(fields.effort.name, "Effort");
        assert_eq!(fields.effort.field_type, FieldType::Number);
        assert!(fields.effort.enum_options.is_none());
        assert_ne!(fields.priority.id, fields.effort.id);
    }

    #[test]
    fn test_values_for_task() {
        let mut rng = StdRng::seed_from_u64(2);
        let fields = CustomFields::new(&mut rng, Uuid::new_v4());
        let task_id = Uuid::new_v4();

        for _ in 0..200 {
            let [priority, effort] = fields.values_for(&mut rng, task_id);
            assert_eq!(priority.field_id, fields.priority.id);
            assert!(priority.value_text.is_none() && priority.value_number.is_none());

            assert_eq!(effort.field_id, fields.effort.id);
            let value = effort.value_number.unwrap();
            assert!((1.0..=8.0).contains(&value));
            assert_eq!(value.fract(), 0.0);
        }
    }
}
