//! Task stage
//!
//! Every task is an independent sequence of draws:
//!
//! 1. creation timestamp inside the look-back window, skewed towards
//!    Monday–Wednesday
//! 2. due date from tiered offset buckets, moved off weekends
//! 3. assignee (20% unassigned)
//! 4. completion, more likely for older tasks and product work
//! 5. completion timestamp between creation and the due date (or now)
//! 6. section placement by workflow stage
//! 7. optional parent among the project's earlier top-level tasks
//! 8. name, description and priority from fixed vocabularies

use super::vocab::{task_names, DETAILED_DESCRIPTION, SHORT_DESCRIPTION};
use super::{pick, ProjectRef, SectionRef, TaskRef, UserRef};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqliteConnection;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};
use uuid::Uuid;
use worksim_shared::config::SeedConfig;
use worksim_shared::error::SeedResult;
use worksim_shared::models::new_id;
use worksim_shared::models::project::ProjectType;
use worksim_shared::models::section::WorkflowStage;
use worksim_shared::models::task::{Priority, Task};
use worksim_shared::sampling::WeightedTable;

/// Share of tasks left without an assignee
pub const UNASSIGNED_PROBABILITY: f64 = 0.2;

/// Chance that a task becomes a subtask (when a parent is available)
pub const SUBTASK_PROBABILITY: f64 = 0.25;

const SECONDS_PER_DAY: i64 = 86_400;

/// Due-date offset bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// No due date
    None,

    /// 1–7 days after creation
    NearTerm,

    /// 8–30 days after creation
    MidTerm,

    /// 31–90 days after creation
    LongTerm,

    /// 1–30 days after creation; only lands in the past when the task is old
    Overdue,
}

impl DueBucket {
    /// Offset range in days, None for tasks without a due date
    pub fn offset_days(&self) -> Option<RangeInclusive<i64>> {
        match self {
            DueBucket::None => None,
            DueBucket::NearTerm => Some(1..=7),
            DueBucket::MidTerm => Some(8..=30),
            DueBucket::LongTerm => Some(31..=90),
            DueBucket::Overdue => Some(1..=30),
        }
    }
}

/// Description flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionKind {
    Missing,
    Short,
    Detailed,
}

/// Weight tables shared by every task of a run
#[derive(Debug, Clone)]
pub struct TaskSampler {
    pub priority: WeightedTable<Priority>,
    pub due_bucket: WeightedTable<DueBucket>,
    pub description: WeightedTable<DescriptionKind>,
}

impl TaskSampler {
    pub fn new() -> SeedResult<Self> {
        Ok(Self {
            priority: WeightedTable::new(vec![
                (Priority::P0, 0.10),
                (Priority::P1, 0.25),
                (Priority::P2, 0.40),
                (Priority::P3, 0.25),
            ])?,
            due_bucket: WeightedTable::new(vec![
                (DueBucket::None, 0.10),
                (DueBucket::NearTerm, 0.25),
                (DueBucket::MidTerm, 0.40),
                (DueBucket::LongTerm, 0.20),
                (DueBucket::Overdue, 0.05),
            ])?,
            description: WeightedTable::new(vec![
                (DescriptionKind::Missing, 0.2),
                (DescriptionKind::Short, 0.5),
                (DescriptionKind::Detailed, 0.3),
            ])?,
        })
    }

    /// Draws a due date for a task created at `created_at`
    pub fn due_date<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        created_at: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let range = self.due_bucket.sample(rng).offset_days()?;
        let due = created_at + Duration::days(rng.gen_range(range));
        Some(shift_off_weekend(due))
    }

    pub fn description<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        match self.description.sample(rng) {
            DescriptionKind::Missing => None,
            DescriptionKind::Short => Some(SHORT_DESCRIPTION.to_string()),
            DescriptionKind::Detailed => Some(DETAILED_DESCRIPTION.to_string()),
        }
    }
}

/// Moves Saturday and Sunday to the following Monday
pub fn shift_off_weekend(at: DateTime<Utc>) -> DateTime<Utc> {
    match at.weekday() {
        Weekday::Sat => at + Duration::days(2),
        Weekday::Sun => at + Duration::days(1),
        _ => at,
    }
}

/// Creation timestamp within `window_days` before `now`
///
/// Thursday to Sunday timestamps move 0–2 days earlier, which thins out the
/// end of the week in favour of Monday–Wednesday.
pub fn random_created_at<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    window_days: i64,
) -> DateTime<Utc> {
    let days_ago = rng.gen_range(0..=window_days.max(0));
    let seconds = rng.gen_range(0..SECONDS_PER_DAY);
    let mut created = now - Duration::days(days_ago) - Duration::seconds(seconds);

    if created.weekday().num_days_from_monday() >= Weekday::Thu.num_days_from_monday() {
        created = created - Duration::days(rng.gen_range(0..=2));
    }
    created
}

/// Per-project base completion rate
pub fn base_completion_probability<R: Rng + ?Sized>(rng: &mut R, project_type: ProjectType) -> f64 {
    match project_type {
        ProjectType::ProductDev => rng.gen_range(0.70..=0.85),
        ProjectType::Marketing => rng.gen_range(0.60..=0.75),
        ProjectType::Operations => rng.gen_range(0.40..=0.60),
    }
}

/// Scales the base rate by task age: fresh tasks get half of it, tasks as
/// old as the window get all of it
pub fn completion_probability(base: f64, age_days: i64, window_days: i64) -> f64 {
    let age_factor = if window_days <= 0 {
        1.0
    } else {
        (age_days.max(0) as f64 / window_days as f64).min(1.0)
    };
    base * (0.5 + 0.5 * age_factor)
}

/// Completion timestamp strictly after `created_at`
///
/// Bounded by the due date or `now`, whichever is earlier. A window that is
/// empty is widened to one day.
pub fn random_completed_at<R: Rng + ?Sized>(
    rng: &mut R,
    created_at: DateTime<Utc>,
    due: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let mut latest = due.map_or(now, |due| due.min(now));
    if latest <= created_at {
        latest = created_at + Duration::days(1);
    }

    let span = (latest - created_at).num_seconds().max(1);
    created_at + Duration::seconds(rng.gen_range(1..=span))
}

/// Section for a task: a done column when completed, a todo column
/// otherwise, any column if the project has no such stage
pub fn pick_section<'a, R: Rng + ?Sized>(
    rng: &mut R,
    sections: &[&'a SectionRef],
    completed: bool,
) -> Option<&'a SectionRef> {
    let wanted = if completed {
        WorkflowStage::Done
    } else {
        WorkflowStage::Todo
    };

    let candidates: Vec<&SectionRef> = sections
        .iter()
        .copied()
        .filter(|s| s.stage == wanted)
        .collect();

    if candidates.is_empty() {
        sections.choose(rng).copied()
    } else {
        candidates.choose(rng).copied()
    }
}

/// Creates `config.tasks_per_project` tasks for every project
pub async fn generate_tasks<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    projects: &[ProjectRef],
    sections: &[SectionRef],
    users: &[UserRef],
    config: &SeedConfig,
    now: DateTime<Utc>,
) -> SeedResult<Vec<TaskRef>> {
    let sampler = TaskSampler::new()?;
    let window_days = config.window_days();
    let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

    let mut sections_by_project: HashMap<Uuid, Vec<&SectionRef>> = HashMap::new();
    for section in sections {
        sections_by_project
            .entry(section.project_id)
            .or_default()
            .push(section);
    }

    let mut tasks = Vec::new();
    let mut completed_count = 0usize;
    let mut subtask_count = 0usize;

    for project in projects {
        let Some(project_sections) = sections_by_project.get(&project.id) else {
            warn!(project_id = %project.id, "Project has no sections, skipping tasks");
            continue;
        };

        let base = base_completion_probability(rng, project.project_type);
        let mut parent_pool: Vec<Uuid> = Vec::new();

        debug!(
            project_id = %project.id,
            team_function = %project.team_function,
            base_completion = base,
            "Generating tasks for project"
        );

        for _ in 0..config.tasks_per_project {
            let created_at = random_created_at(rng, now, window_days);
            let due = sampler.due_date(rng, created_at);

            let assignee_id = if rng.gen_bool(UNASSIGNED_PROBABILITY) {
                None
            } else {
                user_ids.choose(rng).copied()
            };

            let age_days = (now - created_at).num_days();
            let completed = rng.gen::<f64>() < completion_probability(base, age_days, window_days);
            let completed_at = completed.then(|| random_completed_at(rng, created_at, due, now));

            let name = pick(rng, task_names(project.project_type)).to_string();
            let description = sampler.description(rng);
            let priority = sampler.priority.sample(rng);

            let Some(section) = pick_section(rng, project_sections, completed) else {
                continue;
            };

            let parent_task_id = if rng.gen_bool(SUBTASK_PROBABILITY) {
                parent_pool.choose(rng).copied()
            } else {
                None
            };

            let task = Task {
                id: new_id(rng),
                project_id: project.id,
                section_id: section.id,
                parent_task_id,
                name,
                description,
                assignee_id,
                due_date: due.map(|d| d.date_naive()),
                created_at,
                completed,
                completed_at,
                priority,
            };
            task.insert(conn).await?;

            if completed {
                completed_count += 1;
            }
            match parent_task_id {
                Some(_) => subtask_count += 1,
                None => parent_pool.push(task.id),
            }

            tasks.push(TaskRef {
                id: task.id,
                project_id: project.id,
                project_type: project.project_type,
            });
        }
    }

    info!(
        count = tasks.len(),
        completed = completed_count,
        subtasks = subtask_count,
        "Created tasks"
    );
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        // A Wednesday
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
    }

    fn sections_for(project_id: Uuid, layout: &[(&'static str, WorkflowStage)]) -> Vec<SectionRef> {
        layout
            .iter()
            .map(|(name, stage)| SectionRef {
                id: Uuid::new_v4(),
                project_id,
                name: *name,
                stage: *stage,
            })
            .collect()
    }

    #[test]
    fn test_shift_off_weekend() {
        let sat = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        let sun = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let fri = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();

        assert_eq!(shift_off_weekend(sat).weekday(), Weekday::Mon);
        assert_eq!(shift_off_weekend(sun).weekday(), Weekday::Mon);
        assert_eq!(shift_off_weekend(sat), shift_off_weekend(sun));
        assert_eq!(shift_off_weekend(fri), fri);
    }

    #[test]
    fn test_due_dates_avoid_weekends_and_follow_creation() {
        let sampler = TaskSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..5_000 {
            let created = random_created_at(&mut rng, now(), 180);
            if let Some(due) = sampler.due_date(&mut rng, created) {
                assert!(!matches!(due.weekday(), Weekday::Sat | Weekday::Sun));
                assert!(due > created);
                assert!(due <= created + Duration::days(92));
            }
        }
    }

    #[test]
    fn test_missing_due_date_frequency() {
        let sampler = TaskSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(2026);
        let created = now() - Duration::days(30);

        let n = 10_000;
        let missing = (0..n)
            .filter(|_| sampler.due_date(&mut rng, created).is_none())
            .count();
        let ratio = missing as f64 / n as f64;
        assert!((ratio - 0.10).abs() < 0.015, "observed {}", ratio);
    }

    #[test]
    fn test_created_at_within_window() {
        let mut rng = StdRng::seed_from_u64(17);
        let window = 180;

        for _ in 0..5_000 {
            let created = random_created_at(&mut rng, now(), window);
            assert!(created <= now());
            // Weekend skew may push up to two days past the window edge
            assert!(created >= now() - Duration::days(window + 3));
        }
    }

    #[test]
    fn test_created_at_longest_window() {
        let mut rng = StdRng::seed_from_u64(18);
        let window = i64::from(worksim_shared::config::MAX_DATE_RANGE_MONTHS)
            * worksim_shared::config::DAYS_PER_MONTH;

        for _ in 0..1_000 {
            let created = random_created_at(&mut rng, now(), window);
            assert!(created <= now());
            assert!(created >= now() - Duration::days(window + 3));
        }
    }

    #[test]
    fn test_created_at_skews_towards_early_week() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut early = 0usize;
        let mut late = 0usize;

        for _ in 0..20_000 {
            match random_created_at(&mut rng, now(), 180).weekday() {
                Weekday::Mon | Weekday::Tue | Weekday::Wed => early += 1,
                Weekday::Thu | Weekday::Fri | Weekday::Sat => late += 1,
                Weekday::Sun => {}
            }
        }
        assert!(early > late, "early {} late {}", early, late);
    }

    #[test]
    fn test_base_completion_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let p = base_completion_probability(&mut rng, ProjectType::ProductDev);
            assert!((0.70..=0.85).contains(&p));
            let p = base_completion_probability(&mut rng, ProjectType::Marketing);
            assert!((0.60..=0.75).contains(&p));
            let p = base_completion_probability(&mut rng, ProjectType::Operations);
            assert!((0.40..=0.60).contains(&p));
        }
    }

    #[test]
    fn test_completion_probability_scales_with_age() {
        assert!((completion_probability(0.8, 0, 180) - 0.4).abs() < 1e-9);
        assert!((completion_probability(0.8, 90, 180) - 0.6).abs() < 1e-9);
        assert!((completion_probability(0.8, 180, 180) - 0.8).abs() < 1e-9);
        // Capped at the full base rate
        assert!((completion_probability(0.8, 400, 180) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_completed_at_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let created = now() - Duration::days(20);
        let due = created + Duration::days(5);

        for _ in 0..1_000 {
            let done = random_completed_at(&mut rng, created, Some(due), now());
            assert!(done > created && done <= due);

            let done = random_completed_at(&mut rng, created, None, now());
            assert!(done > created && done <= now());
        }
    }

    #[test]
    fn test_completed_at_degenerate_window() {
        let mut rng = StdRng::seed_from_u64(10);
        let created = now();

        for _ in 0..100 {
            let done = random_completed_at(&mut rng, created, None, now());
            assert!(done > created);
            assert!(done <= created + Duration::days(1));
        }
    }

    #[test]
    fn test_pick_section_by_stage() {
        let project_id = Uuid::new_v4();
        let owned = sections_for(
            project_id,
            &[
                ("Backlog", WorkflowStage::Todo),
                ("In Progress", WorkflowStage::InProgress),
                ("In Review", WorkflowStage::InProgress),
                ("Done", WorkflowStage::Done),
            ],
        );
        let sections: Vec<&SectionRef> = owned.iter().collect();
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..100 {
            assert_eq!(pick_section(&mut rng, &sections, true).unwrap().name, "Done");
            assert_eq!(pick_section(&mut rng, &sections, false).unwrap().name, "Backlog");
        }
    }

    #[test]
    fn test_pick_section_falls_back_to_any() {
        let project_id = Uuid::new_v4();
        let owned = sections_for(
            project_id,
            &[
                ("In Progress", WorkflowStage::InProgress),
                ("Blocked", WorkflowStage::InProgress),
            ],
        );
        let sections: Vec<&SectionRef> = owned.iter().collect();
        let mut rng = StdRng::seed_from_u64(13);

        let picked = pick_section(&mut rng, &sections, true).unwrap();
        assert_eq!(picked.stage, WorkflowStage::InProgress);
        assert!(pick_section(&mut rng, &[], false).is_none());
    }

    #[test]
    fn test_priority_weights() {
        let sampler = TaskSampler::new().unwrap();
        let mut rng = StdRng::seed_from_u64(77);
        let n = 20_000;
        let p2 = (0..n)
            .filter(|_| sampler.priority.sample(&mut rng) == Priority::P2)
            .count();
        let ratio = p2 as f64 / n as f64;
        assert!((ratio - 0.40).abs() < 0.02, "observed {}", ratio);
    }
}
