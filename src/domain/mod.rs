//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Short Code Allocation
//!
//! 1. HTTP handler receives a URL to shorten
//! 2. [`crate::application::services::ShortUrlService`] validates it
//! 3. [`repositories::ShortLinkRepository::create_with_next_code`] increments the
//!    counter and inserts the link in one atomic unit
//! 4. A lost race on the same URL is resolved by reading the winner's code back

pub mod entities;
pub mod repositories;
