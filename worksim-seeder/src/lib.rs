//! # worksim Seeder Library
//!
//! Generates a synthetic project-management dataset (organization, teams,
//! users, projects, sections, tasks, comments, tags, custom fields) and
//! writes it to a fresh SQLite file.
//!
//! ## Modules
//!
//! - `generators`: The four generation stages and their vocabularies
//! - `pipeline`: Runs the stages in order inside one transaction
//!
//! ## Example
//!
//! ```no_run
//! use worksim_seeder::pipeline;
//! use worksim_shared::config::SeedConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = pipeline::run(&SeedConfig::default()).await?;
//! assert_eq!(summary.organizations, 1);
//! # Ok(())
//! # }
//! ```

pub mod generators;
pub mod pipeline;
