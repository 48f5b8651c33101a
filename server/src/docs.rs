use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        user_http::create_user,
        user_http::list_users,
        exercises_http::add_exercise,
        exercises_http::get_exercise_log,
    ),
    components(
        schemas(
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
            user_commands::CreateUserForm,
            user_responses::CreatedUserResponse,
            user_responses::UserResponse,
            exercises_commands::AddExerciseForm,
            exercises_responses::AddedExerciseResponse,
            exercises_responses::ExerciseLogResponse,
            exercises_responses::LogEntryResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "exercises", description = "Exercise logging endpoints")
    ),
    info(
        title = "Exercise Tracker API",
        description = "Users, their exercises and filtered exercise logs",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
