//! Repository trait for short link storage and code allocation.

use crate::domain::entities::{InsertOutcome, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links and their code counter.
///
/// Implementations must enforce uniqueness of both `domain` and `short_code`
/// and provide an atomic increment-or-create of the code counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryShortLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Returns the link for `domain`, issuing the next code if it has none.
    ///
    /// As one atomic unit: looks the URL up, increments the counter
    /// (creating it on first use so the first code is 1), and inserts the
    /// new link. An existing link is returned as
    /// [`InsertOutcome::AlreadyExists`] without touching the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a concurrent writer inserted the same
    /// URL first; the attempt is rolled back, counter included.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_with_next_code(&self, domain: &str) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_domain(&self, domain: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, AppError>;
}
