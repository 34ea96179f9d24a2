//! Short link entity mapping a URL to its numeric short code.

use chrono::{DateTime, Utc};

/// A shortened URL.
///
/// `domain` holds the full URL exactly as submitted (the name is historical,
/// it is not a DNS domain). Both `domain` and `short_code` are unique across
/// the store, and codes are issued from a monotonically increasing counter
/// starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub domain: String,
    pub short_code: i64,
    pub created: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(domain: impl Into<String>, short_code: i64, created: DateTime<Utc>) -> Self {
        Self {
            domain: domain.into(),
            short_code,
            created,
        }
    }
}

/// Result of an insert attempt for a URL.
///
/// Both variants carry the link that is now stored for the URL; callers that
/// only need the code collapse them with [`InsertOutcome::into_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new code was issued and the link inserted.
    Created(ShortLink),
    /// The URL was already shortened; no counter value was consumed.
    AlreadyExists(ShortLink),
}

impl InsertOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn link(&self) -> &ShortLink {
        match self {
            Self::Created(link) | Self::AlreadyExists(link) => link,
        }
    }

    pub fn into_link(self) -> ShortLink {
        match self {
            Self::Created(link) | Self::AlreadyExists(link) => link,
        }
    }
}
