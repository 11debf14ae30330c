//! Database models for worksim
//!
//! One module per table of the schema. Models are write-side records: the
//! generators build them in memory and insert each exactly once.
//!
//! # Models
//!
//! - `organization`: The single root entity of a run
//! - `team`: Functional teams and their category
//! - `user`: Organization members
//! - `membership`: User-team relationships
//! - `project`: Team projects and their type
//! - `section`: Ordered workflow columns of a project
//! - `task`: Work items with completion and parent linkage
//! - `tag`: Organization labels and task associations
//! - `custom_field`: Field definitions and per-task values
//! - `comment`: Task discussion
//!
//! # Example
//!
//! ```no_run
//! use worksim_shared::models::{new_id, organization::Organization};
//! use worksim_shared::db::pool::{create_pool, DatabaseConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(&DatabaseConfig::new("output/worksim.sqlite")).await?;
//! let mut conn = pool.acquire().await?;
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let org = Organization {
//!     id: new_id(&mut rng),
//!     name: "NimbusFlow Inc.".to_string(),
//!     domain: "nimbusflow.com".to_string(),
//! };
//! org.insert(&mut conn).await?;
//! # Ok(())
//! # }
//! ```

use rand::Rng;
use uuid::{Builder, Uuid};

pub mod comment;
pub mod custom_field;
pub mod membership;
pub mod organization;
pub mod project;
pub mod section;
pub mod tag;
pub mod task;
pub mod team;
pub mod user;

/// Generates a UUID v4 from the supplied random source
///
/// Drawing identifiers from the run's RNG keeps seeded runs reproducible.
pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_id_is_v4() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = new_id(&mut rng);
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_new_id_is_reproducible() {
        let a = new_id(&mut StdRng::seed_from_u64(11));
        let b = new_id(&mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_ne!(a, new_id(&mut StdRng::seed_from_u64(12)));
    }
}
