//! PostgreSQL implementation of short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{InsertOutcome, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

/// Counter row that issues short codes.
const SHORT_LINK_COUNTER: &str = "domain";

/// Unique index on `short_links.domain`.
const DOMAIN_CONSTRAINT: &str = "short_links_domain_key";

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    domain: String,
    short_code: i64,
    created: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(row.domain, row.short_code, row.created)
    }
}

/// Atomically increments the named counter and returns its new value.
///
/// Creates the counter with value 1 if it does not exist. The upsert holds a
/// row lock until the surrounding transaction ends, so concurrent callers are
/// serialized and never observe the same value.
pub async fn increment_counter(conn: &mut PgConnection, name: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO counters (id, seq_value)
        VALUES ($1, 1)
        ON CONFLICT (id) DO UPDATE SET seq_value = counters.seq_value + 1
        RETURNING seq_value
        "#,
    )
    .bind(name)
    .fetch_one(conn)
    .await
}

/// PostgreSQL repository for short links.
///
/// Allocation runs in one transaction: lookup, counter upsert, insert. A
/// unique violation on `domain` rolls the whole transaction back, so the
/// counter never advances without a matching link.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn create_with_next_code(&self, domain: &str) -> Result<InsertOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT domain, short_code, created FROM short_links WHERE domain = $1",
        )
        .bind(domain)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(row) = existing {
            tx.commit().await?;
            return Ok(InsertOutcome::AlreadyExists(row.into()));
        }

        let short_code = increment_counter(&mut tx, SHORT_LINK_COUNTER).await?;

        let inserted = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (domain, short_code)
            VALUES ($1, $2)
            RETURNING domain, short_code, created
            "#,
        )
        .bind(domain)
        .bind(short_code)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(InsertOutcome::Created(row.into()))
            }
            Err(e) if is_unique_violation_on(&e, DOMAIN_CONSTRAINT) => {
                tx.rollback().await?;
                Err(AppError::conflict(
                    "URL was shortened concurrently",
                    Some(DOMAIN_CONSTRAINT.to_string()),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT domain, short_code, created FROM short_links WHERE domain = $1",
        )
        .bind(domain)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT domain, short_code, created FROM short_links WHERE short_code = $1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
