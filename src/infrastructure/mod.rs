//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository interfaces defined by the domain
//! layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - Process-local repositories for tests and database-less runs

pub mod memory;
pub mod persistence;
