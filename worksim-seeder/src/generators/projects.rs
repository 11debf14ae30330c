//! Project stage: projects per team and their workflow sections

use super::vocab::project_names;
use super::{pick, ProjectRef, SectionRef, TeamRef};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use sqlx::SqliteConnection;
use tracing::{debug, info};
use uuid::Uuid;
use worksim_shared::config::SeedConfig;
use worksim_shared::error::SeedResult;
use worksim_shared::models::new_id;
use worksim_shared::models::project::Project;
use worksim_shared::models::section::{layout_for, Section};

/// How far back a project may have started (days)
pub const MAX_START_OFFSET_DAYS: i64 = 90;

/// Project duration bounds (days)
pub const MIN_DURATION_DAYS: i64 = 30;
pub const MAX_DURATION_DAYS: i64 = 120;

/// Random `(start, end)` dates for a project relative to `today`
pub fn project_dates<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(rng.gen_range(0..=MAX_START_OFFSET_DAYS));
    let end = start + Duration::days(rng.gen_range(MIN_DURATION_DAYS..=MAX_DURATION_DAYS));
    (start, end)
}

/// Creates `config.projects_per_team` projects for every team
///
/// Names may repeat across teams.
pub async fn generate_projects<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    org_id: Uuid,
    teams: &[TeamRef],
    config: &SeedConfig,
    today: NaiveDate,
) -> SeedResult<Vec<ProjectRef>> {
    let mut projects = Vec::new();

    for team in teams {
        let project_type = team.function.project_type();

        for _ in 0..config.projects_per_team {
            let name = pick(rng, project_names(team.function));
            let (start_date, end_date) = project_dates(rng, today);

            let project = Project {
                id: new_id(rng),
                org_id,
                team_id: team.id,
                name: name.to_string(),
                description: format!("{} for {}: {} initiative.", name, org_id, project_type),
                project_type,
                start_date,
                end_date,
            };
            project.insert(conn).await?;

            debug!(project_id = %project.id, team_id = %team.id, %project_type, "Created project");
            projects.push(ProjectRef {
                id: project.id,
                team_function: team.function,
                project_type,
            });
        }
    }

    info!(count = projects.len(), "Created projects");
    Ok(projects)
}

/// Creates the four ordered sections of every project
pub async fn generate_sections<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    projects: &[ProjectRef],
) -> SeedResult<Vec<SectionRef>> {
    let mut sections = Vec::new();

    for project in projects {
        for (position, (name, stage)) in layout_for(project.project_type).into_iter().enumerate() {
            let section = Section {
                id: new_id(rng),
                project_id: project.id,
                name: name.to_string(),
                position: position as i64,
                stage,
            };
            section.insert(conn).await?;

            sections.push(SectionRef {
                id: section.id,
                project_id: project.id,
                name,
                stage,
            });
        }
    }

    info!(count = sections.len(), "Created sections");
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_project_dates_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

        for _ in 0..1_000 {
            let (start, end) = project_dates(&mut rng, today);
            let offset = (today - start).num_days();
            let duration = (end - start).num_days();
            assert!((0..=MAX_START_OFFSET_DAYS).contains(&offset));
            assert!((MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&duration));
        }
    }
}
