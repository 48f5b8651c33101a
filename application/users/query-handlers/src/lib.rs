use std::{collections::HashMap, sync::Arc};

use exercises_dao::ExerciseStore;
use exercises_responses::LogEntryResponse;
use tracing::{debug, instrument};
use user_dao::UserStore;
use user_errors::UserError;
use user_responses::UserResponse;
use uuid::Uuid;

#[derive(Clone)]
pub struct ListUsersQueryHandler {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl ListUsersQueryHandler {
    pub fn new(
        users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>,
    ) -> Self {
        Self { users, exercises }
    }

    /// Every user, oldest first, each with their full log.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<UserResponse>, UserError> {
        let users = self.users.all().await?;
        let exercises = self
            .exercises
            .all()
            .await
            .map_err(|err| UserError::InternalError(err.to_string()))?;
        debug!(users = users.len(), exercises = exercises.len(), "listing");

        let mut logs: HashMap<Uuid, Vec<LogEntryResponse>> = HashMap::new();
        for exercise in exercises {
            logs.entry(exercise.user_id)
                .or_default()
                .push(exercise.into());
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let log = logs.remove(&user.id).unwrap_or_default();
                UserResponse::new(user, log)
            })
            .collect())
    }
}
