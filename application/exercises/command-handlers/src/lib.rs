use std::sync::Arc;

use chrono::Utc;
use exercises_commands::AddExerciseCommand;
use exercises_dao::ExerciseStore;
use exercises_errors::ExerciseError;
use exercises_models::NewExercise;
use exercises_responses::AddedExerciseResponse;
use tracing::{info, instrument};
use user_dao::UserStore;

#[derive(Clone)]
pub struct AddExerciseHandler {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl AddExerciseHandler {
    pub fn new(
        users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>,
    ) -> Self {
        Self { users, exercises }
    }

    /// Fails with a not-found user error, and stores nothing, when the
    /// owner does not exist.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: AddExerciseCommand,
    ) -> Result<AddedExerciseResponse, ExerciseError> {
        let user = self.users.find_by_id(command.user_id).await?;

        let exercise = NewExercise::builder()
            .user_id(user.id)
            .description(command.description)
            .duration(command.duration)
            .date(command.date.unwrap_or_else(|| Utc::now().date_naive()))
            .build();
        let saved = self.exercises.create(exercise).await?;
        info!(exercise_id = %saved.id, user_id = %user.id, "exercise added");

        Ok(AddedExerciseResponse::new(user.username, saved))
    }
}
