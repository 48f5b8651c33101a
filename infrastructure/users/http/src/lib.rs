use std::sync::Arc;

use axum::{
    Router, extract::State, http::StatusCode, response::Json, routing::get,
};
use common_errors::AppError;
use exercises_dao::ExerciseStore;
use request_extract::FormOrJson;
use tracing::instrument;
use user_command_handlers::CreateUserHandler;
use user_commands::{CreateUserCommand, CreateUserForm};
use user_dao::UserStore;
use user_errors::UserError;
use user_query_handlers::ListUsersQueryHandler;
use user_responses::{CreatedUserResponse, UserResponse};

#[derive(Clone)]
pub struct UserServices {
    pub create_user: CreateUserHandler,

    pub list_users: ListUsersQueryHandler,
}

impl UserServices {
    pub fn new(
        users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>,
    ) -> Self {
        Self {
            create_user: CreateUserHandler::new(users.clone()),
            list_users: ListUsersQueryHandler::new(users, exercises),
        }
    }
}

pub struct UserHandlers;

impl UserHandlers {
    pub fn routes() -> Router<UserServices> {
        Router::new().route("/api/users", get(list_users).post(create_user))
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "User created successfully", body = CreatedUserResponse),
        (status = 400, description = "Missing or blank username", body = common_errors::ApiErrorResponse),
        (status = 415, description = "Unsupported body encoding", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(services): State<UserServices>,
    FormOrJson(form): FormOrJson<CreateUserForm>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let command = CreateUserCommand::try_from(form).map_err(UserError::from)?;
    let result = services.create_user.execute(command).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Every user with their exercise log", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn list_users(
    State(services): State<UserServices>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = services.list_users.execute().await?;

    Ok(Json(users))
}
