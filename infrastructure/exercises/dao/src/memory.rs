use async_trait::async_trait;
use exercises_errors::ExerciseError;
use exercises_models::{Exercise, NewExercise};
use exercises_queries::GetExerciseLogQuery;
use memory_connection::MemoryTable;

use crate::ExerciseStore;

/// Process-local exercise table, ordered on read the same way as the
/// PostgreSQL backend.
#[derive(Clone, Default)]
pub struct InMemoryExerciseDao {
    table: MemoryTable<Exercise>,
}

impl InMemoryExerciseDao {
    pub fn new() -> Self { Self::default() }
}

fn sort_log(exercises: &mut [Exercise]) {
    exercises.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl ExerciseStore for InMemoryExerciseDao {
    async fn create(
        &self, req: NewExercise,
    ) -> Result<Exercise, ExerciseError> {
        Ok(self.table.insert(req.into_exercise()).await)
    }

    async fn all(&self) -> Result<Vec<Exercise>, ExerciseError> {
        let mut exercises = self.table.all().await;
        sort_log(&mut exercises);
        Ok(exercises)
    }

    async fn find_log(
        &self, query: &GetExerciseLogQuery,
    ) -> Result<Vec<Exercise>, ExerciseError> {
        let mut log = self
            .table
            .filter(|exercise| {
                exercise.user_id == query.user_id
                    && query.contains(exercise.date)
            })
            .await;
        sort_log(&mut log);

        if let Some(limit) = query.limit {
            log.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(log)
    }
}
