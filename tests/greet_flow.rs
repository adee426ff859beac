//! End-to-end tests for the greet, token, and health endpoints.

mod common;

use common::{spawn_portal, test_config};

#[tokio::test]
async fn test_greet_known_user() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=alice"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome alice"));
    assert!(body.contains("engineering"));
}

#[tokio::test]
async fn test_greet_unknown_user_renders_empty_result() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=nobody"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome nobody"));
    assert!(body.contains("No matching users"));
}

#[tokio::test]
async fn test_greet_requires_input() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/greet")).await.unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "Invalid request");
}

#[tokio::test]
async fn test_greet_rejects_overlong_input() {
    let addr = spawn_portal(test_config()).await;

    let long = "a".repeat(512);
    let res = reqwest::get(format!("http://{addr}/greet?input={long}"))
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    // Generic body only; the offending value is not echoed.
    assert_eq!(res.text().await.unwrap(), "Invalid request");
}

#[tokio::test]
async fn test_greet_renders_configured_profile() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("profile.json");
    std::fs::write(
        &profile_path,
        r#"{"display_name": "Alice Liddell", "bio": "on-call", "interests": ["chess"]}"#,
    )
    .unwrap();

    let mut config = test_config();
    config.profile.path = Some(profile_path);
    let addr = spawn_portal(config).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=alice"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("Alice Liddell"));
    assert!(body.contains("chess"));
}

#[tokio::test]
async fn test_corrupt_profile_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("profile.json");
    std::fs::write(&profile_path, r#"{"display_name": "x", "exploit": true"#).unwrap();

    let mut config = test_config();
    config.profile.path = Some(profile_path);
    let addr = spawn_portal(config).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=alice"))
        .await
        .unwrap();
    assert_eq!(res.status(), 502);

    // Fail closed: generic body, no parser detail, no partial page.
    let body = res.text().await.unwrap();
    assert_eq!(body, "A required service is unavailable");
}

#[tokio::test]
async fn test_greet_with_listing_alias() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("report.txt"), "x").unwrap();

    let mut config = test_config();
    config
        .listings
        .aliases
        .insert("reports".to_string(), dir.path().to_path_buf());
    let addr = spawn_portal(config).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=alice&listing=reports"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("report.txt"));
}

#[tokio::test]
async fn test_health_reports_operational() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    let request_id = res.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_security_headers_present() {
    let addr = spawn_portal(test_config()).await;

    let res = reqwest::get(format!("http://{addr}/greet?input=alice"))
        .await
        .unwrap();
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.headers()["x-frame-options"], "DENY");
}
