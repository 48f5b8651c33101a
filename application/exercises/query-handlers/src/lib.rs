use std::sync::Arc;

use exercises_dao::ExerciseStore;
use exercises_errors::ExerciseError;
use exercises_queries::GetExerciseLogQuery;
use exercises_responses::ExerciseLogResponse;
use tracing::{debug, instrument};
use user_dao::UserStore;

#[derive(Clone)]
pub struct GetExerciseLogQueryHandler {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl GetExerciseLogQueryHandler {
    pub fn new(
        users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>,
    ) -> Self {
        Self { users, exercises }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetExerciseLogQuery,
    ) -> Result<ExerciseLogResponse, ExerciseError> {
        let user = self.users.find_by_id(query.user_id).await?;
        let log = self.exercises.find_log(&query).await?;
        debug!(entries = log.len(), "log fetched");

        Ok(ExerciseLogResponse::new(user.id, user.username, log))
    }
}
