//! Process-local repository implementations.
//!
//! Each repository keeps its table behind a [`tokio::sync::RwLock`]; a write
//! lock spans every multi-step operation, so the lock scope plays the role of
//! a database transaction. Data lives only as long as the process.
//!
//! # Use Cases
//!
//! - Integration tests that exercise full HTTP flows without PostgreSQL
//! - Local runs with `STORAGE_BACKEND=memory`

pub mod memory_exercise_repository;
pub mod memory_short_link_repository;
pub mod memory_user_repository;

pub use memory_exercise_repository::MemoryExerciseRepository;
pub use memory_short_link_repository::MemoryShortLinkRepository;
pub use memory_user_repository::MemoryUserRepository;
