use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use chrono::Utc;
use exercise_tracker::{Persistence, app};
use exercises_models::format_log_date;
use tower::ServiceExt;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn test_app() -> Router { app(Persistence::in_memory(), public_dir()) }

async fn send(
    app: &Router, method: Method, uri: &str, form: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(form) => {
            builder = builder
                .header("content-type", "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_user_exercise_log_scenario() {
    let app = test_app();
    let today = format_log_date(Utc::now().date_naive());

    let response =
        send(&app, Method::POST, "/api/users", Some("username=alice")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    let user_id = user["_id"].as_str().unwrap().to_string();
    assert_eq!(user["username"], "alice");

    let response = send(
        &app,
        Method::POST,
        &format!("/api/users/{user_id}/exercises"),
        Some("description=run&duration=30"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let added = body_json(response).await;
    assert_eq!(added["_id"], user_id.as_str());
    assert_eq!(added["username"], "alice");
    assert_eq!(added["description"], "run");
    assert_eq!(added["duration"], 30);
    let added_date = added["date"].as_str().unwrap().to_string();
    assert!(
        added_date == today
            || added_date == format_log_date(Utc::now().date_naive())
    );

    send(
        &app,
        Method::POST,
        &format!("/api/users/{user_id}/exercises"),
        Some("description=swim&duration=15&date=1990-01-01"),
    )
    .await;

    let response = send(
        &app,
        Method::GET,
        &format!("/api/users/{user_id}/logs?limit=1"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let log = body_json(response).await;
    assert_eq!(log["username"], "alice");
    assert_eq!(log["_id"], user_id.as_str());
    assert_eq!(log["count"], 1);
    assert_eq!(log["log"].as_array().unwrap().len(), 1);
    assert_eq!(log["log"][0]["description"], "swim");
    assert_eq!(log["log"][0]["date"], "Mon Jan 01 1990");

    let response = send(&app, Method::GET, "/api/users", None).await;
    let users = body_json(response).await;
    assert_eq!(users[0]["_id"], user_id.as_str());
    assert_eq!(users[0]["log"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_landing_page() {
    let response = send(&test_app(), Method::GET, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("action=\"/api/users\""));
}

#[tokio::test]
async fn test_static_files() {
    let response = send(&test_app(), Method::GET, "/style.css", None).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let response = send(&test_app(), Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("in-memory"));
}

#[tokio::test]
async fn test_openapi_document() {
    let response =
        send(&test_app(), Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/users"].is_object());
    assert!(doc["paths"]["/api/users/{user_id}/logs"].is_object());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response =
        send(&test_app(), Method::GET, "/no/such/file.txt", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
