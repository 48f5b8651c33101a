use std::path::Path;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use exercises_http::{ExerciseHandlers, ExerciseServices};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use user_http::{UserHandlers, UserServices};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub mod config;
pub mod docs;
pub mod storage;

pub use config::AppConfig;
pub use storage::{Backend, Persistence};

use crate::docs::ApiDoc;

const INDEX_HTML: &str = include_str!("../views/index.html");

/// Full application router: landing page, API, docs, health and the static
/// file fallback.
pub fn app(persistence: Persistence, public_dir: impl AsRef<Path>) -> Router {
    let user_services = UserServices::new(
        persistence.users.clone(),
        persistence.exercises.clone(),
    );
    let exercise_services = ExerciseServices::new(
        persistence.users.clone(),
        persistence.exercises.clone(),
    );

    let api_routes = Router::new()
        .merge(UserHandlers::routes().with_state(user_services))
        .merge(ExerciseHandlers::routes().with_state(exercise_services));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .with_state(persistence)
        .merge(api_routes)
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> { Html(INDEX_HTML) }

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up, with the storage backend status", body = String)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(persistence): State<Persistence>,
) -> impl IntoResponse {
    (StatusCode::OK, persistence.health())
}
