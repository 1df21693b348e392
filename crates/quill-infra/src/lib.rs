//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` - PostgreSQL store via SeaORM; without it only the in-memory
//!   store is available.

pub mod store;

pub use store::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
pub use store::{PostgresPostStore, connect};
