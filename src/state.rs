//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ExerciseService, ShortUrlService};
use crate::infrastructure::memory::{
    MemoryExerciseRepository, MemoryShortLinkRepository, MemoryUserRepository,
};
use crate::infrastructure::persistence::{
    PgExerciseRepository, PgShortLinkRepository, PgUserRepository,
};

/// Application state cloned into each request.
///
/// Services are behind `Arc` so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
    pub exercise_service: Arc<ExerciseService>,
    /// Trust `X-Forwarded-For` / `X-Real-IP` when reporting client IPs.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        short_url_service: Arc<ShortUrlService>,
        exercise_service: Arc<ExerciseService>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            short_url_service,
            exercise_service,
            behind_proxy,
        }
    }

    /// Wires every service to PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: PgPool, behind_proxy: bool) -> Self {
        let pool = Arc::new(pool);

        let short_links = Arc::new(PgShortLinkRepository::new(pool.clone()));
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let exercises = Arc::new(PgExerciseRepository::new(pool));

        Self::new(
            Arc::new(ShortUrlService::new(short_links)),
            Arc::new(ExerciseService::new(users, exercises)),
            behind_proxy,
        )
    }

    /// Wires every service to fresh, empty in-memory repositories.
    pub fn in_memory(behind_proxy: bool) -> Self {
        Self::new(
            Arc::new(ShortUrlService::new(Arc::new(
                MemoryShortLinkRepository::new(),
            ))),
            Arc::new(ExerciseService::new(
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemoryExerciseRepository::new()),
            )),
            behind_proxy,
        )
    }
}
