//! Identity stage: organization, teams, users and memberships
//!
//! Team functions are assigned deterministically by cycling a fixed
//! roster, so the function mix depends only on the team count. Users join
//! one or two teams picked uniformly; team sizes are not balanced.

use super::vocab::{COLOR_NAMES, DESCRIPTIVE_WORDS, FIRST_NAMES, JOB_TITLES, LAST_NAMES, TIMEZONES};
use super::{pick, TeamRef, UserRef};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqliteConnection;
use tracing::{debug, info};
use uuid::Uuid;
use worksim_shared::config::SeedConfig;
use worksim_shared::error::SeedResult;
use worksim_shared::models::membership::TeamMembership;
use worksim_shared::models::new_id;
use worksim_shared::models::organization::Organization;
use worksim_shared::models::team::{Team, TeamFunction};
use worksim_shared::models::user::User;
use worksim_shared::sampling::WeightedTable;

/// Team function roster: 40% engineering, 20% each for the rest
const FUNCTION_ROSTER: [(TeamFunction, usize); 4] = [
    (TeamFunction::Engineering, 20),
    (TeamFunction::Marketing, 10),
    (TeamFunction::Sales, 10),
    (TeamFunction::Operations, 10),
];

/// Function of the team at `ordinal` (0-based)
pub fn roster_function(ordinal: usize) -> TeamFunction {
    let roster_len: usize = FUNCTION_ROSTER.iter().map(|(_, n)| n).sum();
    let mut slot = ordinal % roster_len;

    for (function, count) in FUNCTION_ROSTER {
        if slot < count {
            return function;
        }
        slot -= count;
    }

    TeamFunction::Operations
}

/// Team display name from its function template
pub fn team_name<R: Rng + ?Sized>(rng: &mut R, function: TeamFunction) -> String {
    match function {
        TeamFunction::Engineering => format!("Eng – {} Squad", pick(rng, COLOR_NAMES)),
        TeamFunction::Marketing => format!("Marketing – {} Campaigns", pick(rng, DESCRIPTIVE_WORDS)),
        TeamFunction::Sales => format!("Sales – {} Region", pick(rng, DESCRIPTIVE_WORDS)),
        TeamFunction::Operations => format!("Ops – {} Team", pick(rng, DESCRIPTIVE_WORDS)),
    }
}

/// Creates the single organization of the run
pub async fn generate_organization<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    config: &SeedConfig,
) -> SeedResult<Uuid> {
    let org = Organization {
        id: new_id(rng),
        name: config.org_name.clone(),
        domain: config.org_domain.clone(),
    };
    org.insert(conn).await?;

    info!(org_id = %org.id, name = %org.name, domain = %org.domain, "Created organization");
    Ok(org.id)
}

/// Creates `config.num_teams` teams
pub async fn generate_teams<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    org_id: Uuid,
    config: &SeedConfig,
) -> SeedResult<Vec<TeamRef>> {
    let mut teams = Vec::new();

    for ordinal in 0..config.num_teams {
        let function = roster_function(ordinal);
        let team = Team {
            id: new_id(rng),
            org_id,
            name: team_name(rng, function),
            function,
        };
        team.insert(conn).await?;

        debug!(team_id = %team.id, function = %function, name = %team.name, "Created team");
        teams.push(TeamRef {
            id: team.id,
            function,
        });
    }

    info!(count = teams.len(), "Created teams");
    Ok(teams)
}

/// Creates `config.num_users` users, each a member of 1 or 2 teams
pub async fn generate_users<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    org_id: Uuid,
    teams: &[TeamRef],
    config: &SeedConfig,
) -> SeedResult<Vec<UserRef>> {
    let membership_count = WeightedTable::new(vec![(1usize, 0.5), (2usize, 0.5)])?;
    let team_ids: Vec<Uuid> = teams.iter().map(|t| t.id).collect();

    let mut users = Vec::new();
    let mut memberships = 0usize;

    for _ in 0..config.num_users {
        let first = pick(rng, FIRST_NAMES);
        let last = pick(rng, LAST_NAMES);

        let user = User {
            id: new_id(rng),
            org_id,
            name: format!("{} {}", first, last),
            email: User::email_for(first, last, &config.org_domain),
            title: pick(rng, JOB_TITLES).to_string(),
            timezone: pick(rng, TIMEZONES).to_string(),
        };
        user.insert(conn).await?;

        let k = membership_count.sample(rng).min(team_ids.len());
        let joined: Vec<Uuid> = team_ids.choose_multiple(rng, k).copied().collect();
        for team_id in joined {
            TeamMembership {
                team_id,
                user_id: user.id,
            }
            .insert(conn)
            .await?;
            memberships += 1;
        }

        users.push(UserRef { id: user.id });
    }

    info!(count = users.len(), memberships, "Created users");
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roster_cycles_every_fifty_teams() {
        let functions: Vec<TeamFunction> = (0..50).map(roster_function).collect();
        let count = |f: TeamFunction| functions.iter().filter(|&&x| x == f).count();

        assert_eq!(count(TeamFunction::Engineering), 20);
        assert_eq!(count(TeamFunction::Marketing), 10);
        assert_eq!(count(TeamFunction::Sales), 10);
        assert_eq!(count(TeamFunction::Operations), 10);

        assert_eq!(roster_function(0), TeamFunction::Engineering);
        assert_eq!(roster_function(19), TeamFunction::Engineering);
        assert_eq!(roster_function(20), TeamFunction::Marketing);
        assert_eq!(roster_function(30), TeamFunction::Sales);
        assert_eq!(roster_function(49), TeamFunction::Operations);
        assert_eq!(roster_function(50), TeamFunction::Engineering);
    }

    #[test]
    fn test_team_name_templates() {
        let mut rng = StdRng::seed_from_u64(8);

        let eng = team_name(&mut rng, TeamFunction::Engineering);
        assert!(eng.starts_with("Eng – ") && eng.ends_with(" Squad"), "{}", eng);

        let mkt = team_name(&mut rng, TeamFunction::Marketing);
        assert!(mkt.starts_with("Marketing – ") && mkt.ends_with(" Campaigns"), "{}", mkt);

        let sales = team_name(&mut rng, TeamFunction::Sales);
        assert!(sales.starts_with("Sales – ") && sales.ends_with(" Region"), "{}", sales);

        let ops = team_name(&mut rng, TeamFunction::Operations);
        assert!(ops.starts_with("Ops – ") && ops.ends_with(" Team"), "{}", ops);
    }
}
