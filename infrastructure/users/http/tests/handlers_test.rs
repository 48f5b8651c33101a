use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::Router,
};
use chrono::NaiveDate;
use exercises_dao::{ExerciseStore, InMemoryExerciseDao};
use exercises_models::NewExercise;
use tower::ServiceExt;
use user_dao::InMemoryUserDao;
use user_http::{UserHandlers, UserServices};
use uuid::Uuid;

fn setup_test_app() -> (Router, Arc<InMemoryExerciseDao>) {
    let users = Arc::new(InMemoryUserDao::new());
    let exercises = Arc::new(InMemoryExerciseDao::new());
    let services = UserServices::new(users, exercises.clone());

    (UserHandlers::routes().with_state(services), exercises)
}

fn post_user(content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_create_user_from_form() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_user(
            "application/x-www-form-urlencoded",
            "username=alice",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    let id = json["_id"].as_str().unwrap();
    assert!(id.parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn test_create_user_from_json() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_user("application/json", r#"{"username":"bob"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["username"], "bob");
}

#[tokio::test]
async fn test_create_user_blank_username() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_user(
            "application/x-www-form-urlencoded",
            "username=%20%20",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_missing_username() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_user("application/json", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_unsupported_body() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_user("text/plain", "alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn test_list_users_with_logs() {
    let (app, exercises) = setup_test_app();

    let alice = body_json(
        app.clone()
            .oneshot(post_user(
                "application/x-www-form-urlencoded",
                "username=alice",
            ))
            .await
            .unwrap(),
    )
    .await;
    let bob = body_json(
        app.clone()
            .oneshot(post_user("application/json", r#"{"username":"bob"}"#))
            .await
            .unwrap(),
    )
    .await;
    let alice_id: Uuid = alice["_id"].as_str().unwrap().parse().unwrap();
    exercises
        .create(
            NewExercise::builder()
                .user_id(alice_id)
                .description("run")
                .duration(30)
                .date(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
                .build(),
        )
        .await
        .unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["_id"], alice["_id"]);
    assert_eq!(listed[0]["username"], "alice");
    assert_eq!(listed[0]["log"][0]["description"], "run");
    assert_eq!(listed[0]["log"][0]["duration"], 30);
    assert_eq!(listed[0]["log"][0]["date"], "Mon Jan 01 1990");
    assert_eq!(listed[1]["_id"], bob["_id"]);
    assert_eq!(listed[1]["log"].as_array().unwrap().len(), 0);
}
