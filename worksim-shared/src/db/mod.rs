//! Database layer for worksim
//!
//! - `pool`: SQLite file reset and connection pool
//! - `schema`: Embedded DDL script and table introspection
//!
//! Models live in the `models` module at crate root level.
//!
//! # Example
//!
//! ```no_run
//! use worksim_shared::db::pool::{create_pool, DatabaseConfig};
//! use worksim_shared::db::schema::apply_schema;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("output/worksim.sqlite")).await?;
//!     let mut conn = pool.acquire().await?;
//!     apply_schema(&mut conn).await?;
//!     Ok(())
//! }
//! ```

pub mod pool;
pub mod schema;
