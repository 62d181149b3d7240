use registrar_adapters::{
    PostmarkEmailClient, WELCOME_SUBJECT, config::test::email_client as test_email_client,
};
use registrar_core::Email;
use registrar_service::{ErrorResponse, SignupResponse};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{TestApp, spawn_service};

#[tokio::test]
async fn should_return_201_with_a_token_for_valid_input() {
    let app = TestApp::spawn().await;

    let response = app
        .post_signup(&json!({
            "name": "Username",
            "email": "username@api.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body = response
        .json::<SignupResponse>()
        .await
        .expect("Could not deserialize response body to SignupResponse");
    let claims = app.validate_token(&body.token);
    assert_eq!(claims.email, "username@api.com");
    assert_eq!(app.user_store.len().await, 1);
}

#[tokio::test]
async fn should_send_a_welcome_email_linking_to_login() {
    let app = TestApp::spawn().await;

    let response = app
        .post_signup(&json!({
            "name": "Username",
            "email": "  UserName@Api.com ",
            "password": "password123",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let sent = app.email_client.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "username@api.com");
    assert_eq!(sent[0].subject, WELCOME_SUBJECT);
    assert!(sent[0].content.contains("https://myapp.com/login"));
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::spawn().await;

    let first = app
        .post_signup(&json!({
            "name": "Username",
            "email": "username@api.com",
            "password": "password123",
        }))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_signup(&json!({
            "name": "Someone Else",
            "email": "USERNAME@api.com",
            "password": "another-password",
        }))
        .await;

    assert_eq!(second.status().as_u16(), 409);
    let body = second
        .json::<ErrorResponse>()
        .await
        .expect("Could not deserialize response body to ErrorResponse");
    assert_eq!(body.error, "User already exists");
    assert_eq!(app.user_store.len().await, 1);
    assert_eq!(app.email_client.sent().await.len(), 1);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::spawn().await;

    let test_cases = [
        json!({ "name": "Username", "email": "not-an-email", "password": "password123" }),
        json!({ "name": "Username", "email": "", "password": "password123" }),
        json!({ "name": "   ", "email": "username@api.com", "password": "password123" }),
        json!({ "name": "Username", "email": "username@api.com", "password": "" }),
        json!({ "name": "Username", "email": "username@api.com", "password": "short" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        assert!(
            response.json::<ErrorResponse>().await.is_ok(),
            "Expected an error body for input: {:?}",
            test_case
        );
    }

    assert!(app.user_store.is_empty().await);
    assert!(app.email_client.sent().await.is_empty());
}

#[tokio::test]
async fn should_return_400_if_malformed_body() {
    let app = TestApp::spawn().await;

    let test_cases = [
        json!({ "email": "username@api.com", "password": "password123" }),
        json!({ "name": "Username", "password": "password123" }),
        json!({ "name": "Username", "email": "username@api.com" }),
        json!({ "name": 42, "email": "username@api.com", "password": "password123" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_send_welcome_email_through_postmark() {
    let mock_server = MockServer::start().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (address, _user_store, _token_issuer) = spawn_service(postmark_client(&mock_server)).await;

    let response = reqwest::Client::new()
        .post(format!("{address}/signup"))
        .json(&json!({
            "name": "Username",
            "email": "username@api.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_return_201_even_if_welcome_email_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (address, user_store, _token_issuer) = spawn_service(postmark_client(&mock_server)).await;

    let response = reqwest::Client::new()
        .post(format!("{address}/signup"))
        .json(&json!({
            "name": "Username",
            "email": "username@api.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(user_store.len().await, 1);
}

fn postmark_client(mock_server: &MockServer) -> PostmarkEmailClient {
    let http_client = reqwest::Client::builder()
        .timeout(test_email_client::TIMEOUT)
        .build()
        .unwrap();
    PostmarkEmailClient::new(
        mock_server.uri(),
        Email::try_from(Secret::new(test_email_client::SENDER.to_string())).unwrap(),
        Secret::new("postmark-token".to_string()),
        http_client,
    )
}
