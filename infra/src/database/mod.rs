//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and embedded migrations
//! - Repository implementations of the `tc_core` traits

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlFavoriteRepository, MySqlMessageRepository, MySqlUserRepository};
