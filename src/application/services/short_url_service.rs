//! Short code allocation and resolution service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::InsertOutcome;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::date_parser::parse_leading_int;
use crate::utils::url_validator::validate_url;

/// Message returned for every rejected shortening request.
pub const INVALID_URL: &str = "invalid url";

/// Service for minting short codes and resolving them back to URLs.
///
/// The service holds no mutable state; all coordination between concurrent
/// allocations happens inside the repository's atomic unit and its unique
/// indexes, so any number of instances can share one store.
pub struct ShortUrlService {
    repository: Arc<dyn ShortLinkRepository>,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the short code for `url`, minting one on first use.
    ///
    /// Idempotent: repeated calls with the same URL return the same code.
    /// Concurrent calls racing on one URL converge on the winner's code.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`AppError::Validation`] with
    /// [`INVALID_URL`]: malformed input is rejected before the store is
    /// touched, and storage errors are logged and collapsed into the same
    /// client-facing rejection.
    pub async fn shorten(&self, url: &str) -> Result<i64, AppError> {
        let url = url.trim();

        if let Err(reason) = validate_url(url) {
            debug!(url, %reason, "Rejected URL");
            return Err(AppError::bad_request(INVALID_URL));
        }

        match self.allocate(url).await {
            Ok(code) => Ok(code),
            Err(e) => {
                error!(url, error = %e, "Short code allocation failed");
                Err(AppError::bad_request(INVALID_URL))
            }
        }
    }

    async fn allocate(&self, url: &str) -> Result<i64, AppError> {
        let outcome = match self.repository.create_with_next_code(url).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_conflict() => {
                debug!(url, "Lost allocation race, reading back existing code");
                let existing = self.repository.find_by_domain(url).await?.ok_or_else(|| {
                    AppError::internal("Conflicting short link is not readable")
                })?;
                InsertOutcome::AlreadyExists(existing)
            }
            Err(e) => return Err(e),
        };

        if outcome.is_created() {
            info!(url, code = outcome.link().short_code, "Short code issued");
        }

        Ok(outcome.into_link().short_code)
    }

    /// Resolves a short code to its original URL.
    ///
    /// `code` is read up to its first non-digit, so `1abc` and `1.5` both
    /// resolve code 1. Input without leading digits, or with a negative
    /// value, is rejected without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] when no link has the code. Storage errors are
    /// logged and reported as [`AppError::NotFound`].
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let code = parse_short_code(code)
            .ok_or_else(|| AppError::bad_request("Short code must start with a non-negative integer"))?;

        match self.repository.find_by_code(code).await {
            Ok(Some(link)) => Ok(link.domain),
            Ok(None) => Err(AppError::not_found("Short code not found")),
            Err(e) => {
                error!(code, error = %e, "Short code lookup failed");
                Err(AppError::not_found("Short code not found"))
            }
        }
    }

    /// Counts stored short links.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Reads the leading integer of `input` as a short code.
fn parse_short_code(input: &str) -> Option<i64> {
    parse_leading_int(input).filter(|code| *code >= 0)
}
