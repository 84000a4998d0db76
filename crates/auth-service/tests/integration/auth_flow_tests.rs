//! E2E tests for the signup and login flows.
//!
//! Each test spawns a real server over an isolated database and drives it
//! through HTTP, asserting the status codes and body shapes the frontend
//! relies on.
//!
//! Tests follow the convention: `test_<feature>_<scenario>_<expected_result>`

use auth_test_utils::TestAuthServer;
use reqwest::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

async fn user_count(pool: &SqlitePool) -> Result<i64, anyhow::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}

// ============================================================================
// Signup Tests
// ============================================================================

/// Happy path: a new user can sign up and gets back id, username and email
/// but never the password or its hash.
#[sqlx::test(migrations = "./migrations")]
async fn test_signup_happy_path(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123"
        }))
        .send()
        .await?;

    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "Signup should return 201"
    );

    let text = response.text().await?;
    assert!(
        !text.contains("secret123") && !text.contains("password"),
        "Response must not contain the password or its hash: {}",
        text
    );

    let body: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(body["message"].as_str(), Some("User registered successfully"));
    assert_eq!(body["user"]["username"].as_str(), Some("alice"));
    assert_eq!(body["user"]["email"].as_str(), Some("alice@example.com"));
    assert!(
        !body["user"]["id"].as_str().unwrap_or_default().is_empty(),
        "Response should include the assigned id"
    );

    Ok(())
}

/// Missing any of the three fields is a 400 and creates no record.
#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_fields_rejected(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool.clone()).await?;

    let bodies = [
        json!({ "email": "alice@example.com", "password": "secret123" }),
        json!({ "username": "alice", "password": "secret123" }),
        json!({ "username": "alice", "email": "alice@example.com" }),
        json!({}),
    ];

    for body in bodies {
        let response = server
            .client()
            .post(format!("{}/api/auth/signup", server.url()))
            .json(&body)
            .send()
            .await?;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Signup with missing fields should return 400: {}",
            body
        );

        let error: serde_json::Value = response.json().await?;
        assert_eq!(error["error"]["code"].as_str(), Some("VALIDATION_ERROR"));
        assert_eq!(
            error["error"]["message"].as_str(),
            Some("username, email and password are required")
        );
    }

    assert_eq!(user_count(&pool).await?, 0, "No record may be created");

    Ok(())
}

/// Empty-string fields count as absent.
#[sqlx::test(migrations = "./migrations")]
async fn test_signup_empty_fields_rejected(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool.clone()).await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&json!({ "username": "", "email": "alice@example.com", "password": "secret123" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(user_count(&pool).await?, 0);

    Ok(())
}

/// Signing up twice with the same email: the second call is a 409 and
/// exactly one record exists afterwards.
#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email_conflict(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool.clone()).await?;

    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "secret123"
    });

    let first = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&body)
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&body)
        .send()
        .await?;
    assert_eq!(
        second.status(),
        StatusCode::CONFLICT,
        "Duplicate signup should return 409"
    );

    let error: serde_json::Value = second.json().await?;
    assert_eq!(error["error"]["code"].as_str(), Some("USER_EXISTS"));
    assert_eq!(error["error"]["message"].as_str(), Some("User already exists"));

    assert_eq!(user_count(&pool).await?, 1);

    Ok(())
}

// ============================================================================
// Login Tests
// ============================================================================

/// Signup followed by login with the same credentials succeeds and returns
/// the same account.
#[sqlx::test(migrations = "./migrations")]
async fn test_login_after_signup(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    let signup: serde_json::Value = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123"
        }))
        .send()
        .await?
        .json()
        .await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "alice@example.com", "password": "secret123" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK, "Login should return 200");

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["message"].as_str(), Some("Login successful"));
    assert_eq!(body["user"]["username"].as_str(), Some("alice"));
    assert_eq!(body["user"]["email"].as_str(), Some("alice@example.com"));
    assert_eq!(
        body["user"]["id"], signup["user"]["id"],
        "Login should return the id assigned at signup"
    );

    Ok(())
}

/// Wrong password on a known account is a 401, not a 404.
#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_unauthorized(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123"
        }))
        .send()
        .await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "alice@example.com", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error: serde_json::Value = response.json().await?;
    assert_eq!(error["error"]["code"].as_str(), Some("INVALID_CREDENTIALS"));
    assert_eq!(error["error"]["message"].as_str(), Some("Invalid credentials"));

    Ok(())
}

/// Login with an email never signed up is a 404.
#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email_not_found(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "nobody@example.com", "password": "secret123" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: serde_json::Value = response.json().await?;
    assert_eq!(error["error"]["code"].as_str(), Some("USER_NOT_FOUND"));
    assert_eq!(error["error"]["message"].as_str(), Some("User not found"));

    Ok(())
}

/// Missing login fields are a 400 with the login-specific message.
#[sqlx::test(migrations = "./migrations")]
async fn test_login_missing_fields_rejected(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    let response = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "alice@example.com" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: serde_json::Value = response.json().await?;
    assert_eq!(
        error["error"]["message"].as_str(),
        Some("email and password are required")
    );

    Ok(())
}

// ============================================================================
// Full Scenario
// ============================================================================

/// The concrete end-to-end scenario: signup 201, wrong password 401, correct
/// password 200 with the same user id.
#[sqlx::test(migrations = "./migrations")]
async fn test_signup_login_round_trip(pool: SqlitePool) -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn(pool).await?;

    let signup = server
        .client()
        .post(format!("{}/api/auth/signup", server.url()))
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123"
        }))
        .send()
        .await?;
    assert_eq!(signup.status(), StatusCode::CREATED);
    let signup: serde_json::Value = signup.json().await?;
    assert_eq!(signup["user"]["email"].as_str(), Some("alice@example.com"));

    let bad = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "alice@example.com", "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);

    let good = server
        .client()
        .post(format!("{}/api/auth/login", server.url()))
        .json(&json!({ "email": "alice@example.com", "password": "secret123" }))
        .send()
        .await?;
    assert_eq!(good.status(), StatusCode::OK);
    let good: serde_json::Value = good.json().await?;
    assert_eq!(good["user"]["id"], signup["user"]["id"]);

    Ok(())
}
