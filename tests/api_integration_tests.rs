//! Integration tests for the User Directory HTTP API
//!
//! Each test drives a fresh router with its own empty directory.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn create(app: &Router, username: &str, email: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/users",
        Some(json!({
            "username": username,
            "email": email,
            "password": "password123"
        })),
    )
    .await
}

#[tokio::test]
async fn test_root_returns_service_info() {
    let app = user_directory::create_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to User Management API");
    assert_eq!(body["docs"], "/docs");
    assert_eq!(body["health"], "/health");
}

#[tokio::test]
async fn test_health_check() {
    let app = user_directory::create_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = user_directory::create_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_create_user_returns_record_without_password() {
    let app = user_directory::create_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123",
            "full_name": "Alice Smith"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["full_name"], "Alice Smith");
    assert_eq!(body["is_active"], true);
    assert!(body["created_at"].is_string());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_duplicate_username_and_email() {
    let app = user_directory::create_app();

    let (status, _) = create(&app, "alice", "alice@example.com").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create(&app, "alice", "other@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "duplicate_value_error");
    assert_eq!(body["error"]["message"], "Username 'alice' already exists");

    let (status, body) = create(&app, "other", "alice@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Email 'alice@example.com' already exists");

    // Rejected creates never consume an id
    let (status, body) = create(&app, "bob", "bob@example.com").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let app = user_directory::create_app();

    let cases = [
        (json!({"username": "ab", "email": "a@example.com", "password": "password123"}), "username"),
        (json!({"username": "abc", "email": "not-an-email", "password": "password123"}), "email"),
        (json!({"username": "abc", "email": "a@example.com", "password": "short"}), "password"),
        (
            json!({"username": "a".repeat(51), "email": "a@example.com", "password": "password123"}),
            "username",
        ),
    ];

    for (payload, field) in cases {
        let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["type"], "validation_error");
        assert_eq!(body["error"]["param"], field);
    }

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_create_boundary_lengths_accepted() {
    let app = user_directory::create_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "abc", "email": "a@example.com", "password": "12345678"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "b".repeat(50), "email": "b@example.com", "password": "12345678"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = user_directory::create_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "validation_error");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::from(r#"{"username":"alice"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_and_update_without_content_type() {
    let app = user_directory::create_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::from(
            json!({"username": "alice", "email": "alice@example.com", "password": "password123"})
                .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/users/1")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(
            json!({"username": "alice2", "email": "alice@example.com"}).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_rejects_undotted_email_domains() {
    let app = user_directory::create_app();

    for email in ["a@b", "alice@localhost", "alice@[127.0.0.1]"] {
        let (status, body) = create(&app, "alice", email).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["param"], "email");
    }

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_list_users_pagination() {
    let app = user_directory::create_app();

    for name in ["alice", "bob", "carol", "dave"] {
        let (status, _) = create(&app, name, &format!("{}@example.com", name)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (_, body) = send(&app, Method::GET, "/users?skip=1&limit=2", None).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let (_, body) = send(&app, Method::GET, "/users?skip=10", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/users?limit=0", None).await;
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::GET, "/users?skip=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "invalid_query");
}

#[tokio::test]
async fn test_get_user() {
    let app = user_directory::create_app();
    create(&app, "alice", "alice@example.com").await;

    let (status, body) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");

    let (status, body) = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
    assert_eq!(body["error"]["message"], "User with id 999 not found");
    let error = body["error"].as_object().unwrap();
    assert!(error["param"].is_null());
    assert!(error.contains_key("code"));

    let (status, body) = send(&app, Method::GET, "/users/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User with id -1 not found");

    let (status, _) = send(&app, Method::DELETE, "/users/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "invalid_path");
}

#[tokio::test]
async fn test_update_user() {
    let app = user_directory::create_app();
    let (_, created) = create(&app, "alice", "alice@example.com").await;
    create(&app, "bob", "bob@example.com").await;

    // Keeping its own username and email is not a collision
    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({"username": "alice", "email": "alice@example.com", "full_name": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Alice");
    assert_eq!(body["created_at"], created["created_at"]);
    assert_eq!(body["is_active"], true);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({"username": "alice2", "email": "alice2@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice2");
    assert!(body["full_name"].is_null());

    // The old username is free again
    let (status, _) = create(&app, "alice", "alice@example.com").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({"username": "bob", "email": "alice2@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "duplicate_value_error");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({"username": "alice2", "email": "bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/999",
        Some(json!({"username": "ghost", "email": "ghost@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = user_directory::create_app();
    create(&app, "alice", "alice@example.com").await;

    let (status, body) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Freed values can be reused, ids are not
    let (status, body) = create(&app, "alice", "alice@example.com").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_delete_middle_user_keeps_order() {
    let app = user_directory::create_app();
    create(&app, "user_a", "a@example.com").await;
    create(&app, "user_b", "b@example.com").await;
    create(&app, "user_c", "c@example.com").await;

    let (status, _) = send(&app, Method::DELETE, "/users/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/users", None).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let (status, _) = send(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = user_directory::create_app();

    let (status, _) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
