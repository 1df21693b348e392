//! Post store implementations.

mod config;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use config::DatabaseConfig;
pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use postgres::{PostgresPostStore, connect};
