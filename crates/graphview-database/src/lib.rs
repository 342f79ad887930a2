//! # graphview-database
//!
//! PostgreSQL connection management, migrations, and the user store used by
//! registration. An in-memory store stands in when no database is configured.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryUserRepository, PgUserRepository, UserStore};
