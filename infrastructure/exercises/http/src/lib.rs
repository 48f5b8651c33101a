use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use common_errors::AppError;
use exercises_command_handlers::AddExerciseHandler;
use exercises_commands::{AddExerciseCommand, AddExerciseForm};
use exercises_dao::ExerciseStore;
use exercises_errors::ExerciseError;
use exercises_queries::{GetExerciseLogQuery, LogParams};
use exercises_query_handlers::GetExerciseLogQueryHandler;
use exercises_responses::{AddedExerciseResponse, ExerciseLogResponse};
use request_extract::FormOrJson;
use tracing::instrument;
use user_dao::UserStore;
use uuid::Uuid;

#[derive(Clone)]
pub struct ExerciseServices {
    pub add_exercise: AddExerciseHandler,

    pub get_log: GetExerciseLogQueryHandler,
}

impl ExerciseServices {
    pub fn new(
        users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>,
    ) -> Self {
        Self {
            add_exercise: AddExerciseHandler::new(
                users.clone(),
                exercises.clone(),
            ),
            get_log: GetExerciseLogQueryHandler::new(users, exercises),
        }
    }
}

pub struct ExerciseHandlers;

impl ExerciseHandlers {
    pub fn routes() -> Router<ExerciseServices> {
        Router::new()
            .route("/api/users/{user_id}/exercises", post(add_exercise))
            .route("/api/users/{user_id}/logs", get(get_exercise_log))
    }
}

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse::<Uuid>().map_err(|_| {
        AppError::bad_request_with_details(
            "INVALID_USER_ID",
            "Invalid user id format provided",
            raw,
        )
    })
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/exercises",
    request_body(
        content = AddExerciseForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 201, description = "Exercise added", body = AddedExerciseResponse),
        (status = 400, description = "Invalid user id or exercise fields", body = common_errors::ApiErrorResponse),
        (status = 404, description = "User not found", body = common_errors::ApiErrorResponse),
        (status = 415, description = "Unsupported body encoding", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "exercises"
)]
#[instrument(skip_all)]
pub async fn add_exercise(
    State(services): State<ExerciseServices>, Path(user_id): Path<String>,
    FormOrJson(form): FormOrJson<AddExerciseForm>,
) -> Result<(StatusCode, Json<AddedExerciseResponse>), AppError> {
    let user_id = parse_user_id(&user_id)?;
    let command = AddExerciseCommand::from_form(user_id, form)
        .map_err(ExerciseError::from)?;
    let result = services.add_exercise.execute(command).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/logs",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        LogParams
    ),
    responses(
        (status = 200, description = "The user's exercise log", body = ExerciseLogResponse),
        (status = 400, description = "Invalid user id or query parameters", body = common_errors::ApiErrorResponse),
        (status = 404, description = "User not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "exercises"
)]
#[instrument(skip_all)]
pub async fn get_exercise_log(
    State(services): State<ExerciseServices>, Path(user_id): Path<String>,
    params: Result<Query<LogParams>, QueryRejection>,
) -> Result<Json<ExerciseLogResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let Query(params) = params.map_err(|rejection| {
        AppError::bad_request_with_details(
            "INVALID_QUERY",
            "Query string could not be parsed",
            &rejection.body_text(),
        )
    })?;
    let query = GetExerciseLogQuery::from_params(user_id, params)
        .map_err(ExerciseError::from)?;
    let log = services.get_log.execute(query).await?;

    Ok(Json(log))
}
