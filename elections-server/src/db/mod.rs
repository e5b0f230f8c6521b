//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - List operations use JOINs - no N+1 queries
//! - Batch inserts run in a single transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{
    create_pool, create_pool_with_options, PoolSettings, DEFAULT_ACQUIRE_TIMEOUT,
    DEFAULT_MAX_CONNECTIONS,
};
pub use repos::*;
