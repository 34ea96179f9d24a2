//! In-memory implementation of exercise repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Exercise, LogFilter, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

#[derive(Default)]
struct ExerciseTable {
    last_id: i64,
    rows: Vec<Exercise>,
}

/// Exercise store held in process memory.
#[derive(Default)]
pub struct MemoryExerciseRepository {
    table: RwLock<ExerciseTable>,
}

impl MemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for MemoryExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let exercise = Exercise {
            id: table.last_id,
            user_id: new_exercise.user_id,
            description: new_exercise.description,
            duration: new_exercise.duration,
            date: new_exercise.date,
        };
        table.rows.push(exercise.clone());

        Ok(exercise)
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError> {
        let table = self.table.read().await;

        let mut log: Vec<Exercise> = table
            .rows
            .iter()
            .filter(|e| e.user_id == user_id && filter.contains(&e.date))
            .cloned()
            .collect();
        log.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        if let Some(limit) = filter.limit {
            log.truncate(usize::try_from(limit).unwrap_or(0));
        }

        Ok(log)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}
