use reqwest::Method;

use crate::helpers::{ALLOWED_ORIGIN, TestApp};

async fn preflight(app: &TestApp, origin: &str) -> reqwest::Response {
    app.http_client
        .request(Method::OPTIONS, format!("{}/signup", &app.address))
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn allowed_origin_passes_preflight() {
    let app = TestApp::spawn().await;

    let response = preflight(&app, ALLOWED_ORIGIN).await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn unknown_origin_is_not_allowed() {
    let app = TestApp::spawn().await;

    let response = preflight(&app, "https://evil.com").await;

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
