use exercises_models::{Exercise, format_log_date};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One entry of a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: i32,
    #[schema(example = "Mon Jan 15 2024")]
    pub date: String,
}

impl From<Exercise> for LogEntryResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_log_date(exercise.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddedExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    #[schema(example = "Mon Jan 15 2024")]
    pub date: String,
}

impl AddedExerciseResponse {
    pub fn new(username: String, exercise: Exercise) -> Self {
        Self {
            id: exercise.user_id,
            username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_log_date(exercise.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub log: Vec<LogEntryResponse>,
}

impl ExerciseLogResponse {
    pub fn new(user_id: Uuid, username: String, log: Vec<Exercise>) -> Self {
        let log: Vec<LogEntryResponse> =
            log.into_iter().map(LogEntryResponse::from).collect();
        Self {
            username,
            count: log.len(),
            id: user_id,
            log,
        }
    }
}
