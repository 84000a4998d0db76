use crate::config::Config;
use crate::errors::AuthError;
use crate::models::AuthResponse;
use crate::services::auth_service::{self, LoginRequest, SignupRequest};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Raw signup body. Fields are optional so that a missing key surfaces as
/// our 400 validation error rather than a framework deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Raw login body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

/// Handle user signup
///
/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupBody>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let request = SignupRequest::new(payload.username, payload.email, payload.password)?;

    let user = auth_service::sign_up(&state.pool, state.config.bcrypt_cost, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Handle user login
///
/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginBody>,
) -> Result<Json<AuthResponse>, AuthError> {
    let request = LoginRequest::new(payload.email, payload.password)?;

    let user = auth_service::log_in(&state.pool, request).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
