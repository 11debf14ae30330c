//! # worksim Shared Library
//!
//! Shared types and store access used by the worksim seeder.
//!
//! ## Module Organization
//!
//! - `config`: Run configuration (explicit struct, optional env loading)
//! - `db`: SQLite pool and schema loader
//! - `error`: Common error types
//! - `models`: Database models, one per table
//! - `sampling`: Weighted random choice

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod sampling;

/// Current version of the worksim shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
