//! End-to-end tests of the users API over real HTTP.

use reqwest::StatusCode;
use sdk_rust::{ClientError, User, UserClient};
use serde_json::{json, Value};
use user_service::ServiceConfig;

mod common;

#[tokio::test]
async fn test_user_lifecycle() {
    let server = common::start_server(ServiceConfig::default()).await;
    let http = reqwest::Client::new();
    let users_url = format!("{}/api/v1/users", server.url());

    let res = http
        .post(&users_url)
        .json(&json!({"id": 1, "first_name": "Bob", "last_name": "Smith"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"id": 1}));

    let res = http.get(format!("{}/1", users_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"user": {"id": 1, "first_name": "Bob", "last_name": "Smith"}})
    );

    let res = http
        .put(format!("{}/1", users_url))
        .json(&json!({"favorite_color": "Green"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({}));

    let res = http.get(format!("{}/999", users_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"error": "User not found"})
    );

    let res = http
        .post(&users_url)
        .json(&json!({"id": 0, "first_name": "Bob", "last_name": "Smith"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"error": "Invalid function argument(s)"})
    );
}

#[tokio::test]
async fn test_sdk_round_trip() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = UserClient::new(&server.url());

    client.health().await.unwrap();
    assert_eq!(client.create_user(7, "Jane", "Doe", Some("Blue")).await.unwrap(), 7);
    client.update_user_color(7, "Red").await.unwrap();

    let user = client.read_user(7).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 7,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            favorite_color: Some("Red".into()),
        }
    );

    // Create overwrites.
    client.create_user(7, "Janet", "Doe", None).await.unwrap();
    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name, "Janet");
    assert_eq!(users[0].favorite_color, None);

    match client.update_user_color(8, "Red").await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_requests() {
    let server = common::start_server(ServiceConfig::default()).await;
    let http = reqwest::Client::new();
    let users_url = format!("{}/api/v1/users", server.url());

    let res = http.get(format!("{}/abc", users_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = http
        .post(&users_url)
        .header("content-type", "application/json")
        .body("{\"id\": 1,")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(server.repo.is_empty());

    let res = http.delete(format!("{}/1", users_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "method not allowed");
}

#[tokio::test]
async fn test_oversized_body_is_json_error() {
    let mut config = ServiceConfig::default();
    config.security.max_body_size = 16;
    let server = common::start_server(config).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/v1/users", server.url()))
        .body(r#"{"id":1,"first_name":"Bartholomew","last_name":"Smith"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "length limit exceeded");
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_token_protected_server() {
    let mut config = ServiceConfig::default();
    config.security.token = Some("s3cret".into());
    let server = common::start_server(config).await;

    let anonymous = UserClient::new(&server.url());
    anonymous.health().await.unwrap();
    match anonymous.list_users().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "unauthorized");
        }
        other => panic!("expected unauthorized, got {:?}", other),
    }

    let client = UserClient::new(&server.url()).with_token("s3cret");
    client.create_user(1, "Bob", "Smith", None).await.unwrap();
    assert_eq!(client.list_users().await.unwrap().len(), 1);
}
