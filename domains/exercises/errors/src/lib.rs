use common_errors::{AppError, ValidationError};
use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;
use user_errors::UserError;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
}

impl From<ExerciseError> for AppError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::User(user_err) => user_err.into(),
            ExerciseError::Validation(validation) => validation.into(),
            ExerciseError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            ExerciseError::DatabasePool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
        }
    }
}
