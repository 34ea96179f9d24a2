//! In-memory implementation of short link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{InsertOutcome, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct ShortLinkTable {
    /// Last issued code; 0 until the first allocation.
    seq_value: i64,
    by_domain: HashMap<String, ShortLink>,
    by_code: HashMap<i64, String>,
}

/// Short link store held in process memory.
#[derive(Default)]
pub struct MemoryShortLinkRepository {
    table: RwLock<ShortLinkTable>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn create_with_next_code(&self, domain: &str) -> Result<InsertOutcome, AppError> {
        let mut table = self.table.write().await;

        if let Some(existing) = table.by_domain.get(domain) {
            return Ok(InsertOutcome::AlreadyExists(existing.clone()));
        }

        table.seq_value += 1;
        let link = ShortLink::new(domain, table.seq_value, Utc::now());

        table.by_code.insert(link.short_code, link.domain.clone());
        table.by_domain.insert(link.domain.clone(), link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.table.read().await.by_domain.get(domain).cloned())
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .by_code
            .get(&short_code)
            .and_then(|domain| table.by_domain.get(domain))
            .cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.by_domain.len() as i64)
    }
}
