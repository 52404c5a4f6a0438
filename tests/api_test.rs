use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mergington_activities::core::seed::default_seed;
use mergington_activities::{build_router, AppState, InMemoryRoster};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_with_static(static_dir: &str) -> Router {
    let roster = InMemoryRoster::from_seed(default_seed()).unwrap();
    build_router(AppState::new(Arc::new(roster)), static_dir)
}

fn app() -> Router {
    app_with_static("static")
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn participants(activities: &Value, name: &str) -> Vec<String> {
    activities[name]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_get_root_redirects_to_static_index() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/static/index.html");
}

#[tokio::test]
async fn test_get_activities() {
    let (status, activities) = send(&app(), Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let map = activities.as_object().unwrap();
    assert!(!map.is_empty());

    for details in map.values() {
        assert!(details["description"].is_string());
        assert!(details["schedule"].is_string());
        assert!(details["max_participants"].is_u64());
        assert!(details["participants"].is_array());
    }

    let chess = participants(&activities, "Chess Club");
    assert!(chess.contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn test_signup_for_activity_success() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=test_student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Signed up test_student@mergington.edu for Chess Club"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    assert!(participants(&activities, "Chess Club")
        .contains(&"test_student@mergington.edu".to_string()));
}

#[tokio::test]
async fn test_signup_for_nonexistent_activity() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/NonexistentClub/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_duplicate_signup() {
    let app = app();
    let uri = "/activities/Programming%20Class/signup?email=duplicate@mergington.edu";

    let (status, _) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Student already signed up for this activity"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    let count = participants(&activities, "Programming Class")
        .iter()
        .filter(|p| p.as_str() == "duplicate@mergington.edu")
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_unregister_from_activity_success() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered michael@mergington.edu from Chess Club"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    let chess = participants(&activities, "Chess Club");
    assert!(!chess.contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn test_unregister_from_nonexistent_activity() {
    let (status, body) = send(
        &app(),
        Method::DELETE,
        "/activities/NonexistentClub/unregister?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_nonregistered_student() {
    let (status, body) = send(
        &app(),
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=notregistered@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Student is not registered for this activity"
    );
}

#[tokio::test]
async fn test_signup_then_unregister_restores_roster() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/Gym%20Class/signup?email=roundtrip%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Gym%20Class/unregister?email=roundtrip%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(
        participants(&before, "Gym Class"),
        participants(&after, "Gym Class")
    );
}

#[tokio::test]
async fn test_missing_or_blank_email_is_rejected() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;

    let (status, body) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"));

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=%20%20",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_padded_email_is_stored_and_echoed_verbatim() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=%20padded@mergington.edu%20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Signed up  padded@mergington.edu  for Chess Club"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    let chess = participants(&activities, "Chess Club");
    assert!(chess.contains(&" padded@mergington.edu ".to_string()));
    assert!(!chess.contains(&"padded@mergington.edu".to_string()));

    // 未加空白的 email 是不同的學生
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=padded@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Student is not registered for this activity"
    );

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=%20padded@mergington.edu%20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered  padded@mergington.edu  from Chess Club"
    );
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let (status, _) = send(
        &app(),
        Method::GET,
        "/activities/Chess%20Club/signup?email=student@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let static_dir = TempDir::new().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<h1>Mergington High School</h1>",
    )
    .unwrap();

    let app = app_with_static(static_dir.path().to_str().unwrap());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Mergington High School"));
}
