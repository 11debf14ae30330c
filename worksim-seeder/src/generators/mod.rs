//! Generator stages
//!
//! Each stage writes its rows through the run's connection and hands
//! lightweight descriptors of what it created to the next stage.
//!
//! ```text
//! identity    → organization, teams, users, team_memberships
//! projects    → projects, sections
//! tasks       → tasks
//! annotations → tags, custom fields, comments, task_tags
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;
use worksim_shared::models::project::ProjectType;
use worksim_shared::models::section::WorkflowStage;
use worksim_shared::models::team::TeamFunction;

pub mod annotations;
pub mod identity;
pub mod projects;
pub mod tasks;
pub mod vocab;

/// Team created by the identity stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRef {
    pub id: Uuid,
    pub function: TeamFunction,
}

/// User created by the identity stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
}

/// Project created by the project stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: Uuid,
    pub team_function: TeamFunction,
    pub project_type: ProjectType,
}

/// Section created by the project stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRef {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: &'static str,
    pub stage: WorkflowStage,
}

/// Task created by the task stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRef {
    pub id: Uuid,
    pub project_id: Uuid,
    pub project_type: ProjectType,
}

/// Uniform choice from a vocabulary (empty string for an empty list)
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}
