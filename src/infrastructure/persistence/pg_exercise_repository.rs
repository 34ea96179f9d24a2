//! PostgreSQL implementation of exercise repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Exercise, LogFilter, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ExerciseRow {
    id: i64,
    user_id: i64,
    description: String,
    duration: i64,
    date: DateTime<Utc>,
}

impl From<ExerciseRow> for Exercise {
    fn from(row: ExerciseRow) -> Self {
        Exercise {
            id: row.id,
            user_id: row.user_id,
            description: row.description,
            duration: row.duration,
            date: row.date,
        }
    }
}

/// PostgreSQL repository for exercise log entries.
///
/// Log queries are served by the `(user_id, date)` index.
pub struct PgExerciseRepository {
    pool: Arc<PgPool>,
}

impl PgExerciseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date
            "#,
        )
        .bind(new_exercise.user_id)
        .bind(new_exercise.description)
        .bind(new_exercise.duration)
        .bind(new_exercise.date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError> {
        // LIMIT NULL is no limit in PostgreSQL.
        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT id, user_id, description, duration, date
            FROM exercises
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR date >= $2)
              AND ($3::timestamptz IS NULL OR date <= $3)
            ORDER BY date ASC, id ASC
            LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Exercise::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
