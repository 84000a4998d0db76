//! Auth service module for signup and login.
//!
//! Both operations are single-pass request/response transactions: each call
//! either fully succeeds (one record created or one match confirmed) or
//! fails with no partial side effect.

use crate::crypto;
use crate::errors::AuthError;
use crate::models::UserSummary;
use crate::observability::metrics::record_auth_attempt;
use crate::repositories::users;
use sqlx::SqlitePool;

/// Validated signup request. Construction guarantees all three fields are
/// present and non-blank, so the service never sees a malformed request.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AuthError> {
        match (require(username), require(email), require(password)) {
            (Some(username), Some(email), Some(password)) => Ok(SignupRequest {
                username,
                email,
                password,
            }),
            _ => Err(AuthError::Validation(
                "username, email and password are required".to_string(),
            )),
        }
    }
}

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, AuthError> {
        match (require(email), require(password)) {
            (Some(email), Some(password)) => Ok(LoginRequest { email, password }),
            _ => Err(AuthError::Validation(
                "email and password are required".to_string(),
            )),
        }
    }
}

/// A field counts as present only if it contains something besides
/// whitespace. The value itself is kept verbatim (passwords are never
/// trimmed).
fn require(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

/// Register a new user.
///
/// # Steps
///
/// 1. Check the email is not already registered (no hashing if it is)
/// 2. Hash the password (bcrypt, configured cost)
/// 3. Insert the user row
///
/// The existence check and the insert are separate store calls; the unique
/// index on email resolves the race between them, so a concurrent duplicate
/// signup also surfaces as `Conflict`.
pub async fn sign_up(
    pool: &SqlitePool,
    bcrypt_cost: u32,
    request: SignupRequest,
) -> Result<UserSummary, AuthError> {
    if users::email_exists(pool, &request.email).await? {
        record_auth_attempt("signup", "conflict");
        return Err(AuthError::Conflict);
    }

    let password_hash = crypto::hash_password(&request.password, bcrypt_cost)?;

    let user = match users::create_user(pool, &request.username, &request.email, &password_hash)
        .await
    {
        Ok(user) => user,
        Err(AuthError::Conflict) => {
            record_auth_attempt("signup", "conflict");
            return Err(AuthError::Conflict);
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            record_auth_attempt("signup", "error");
            return Err(e);
        }
    };

    tracing::info!(user_id = %user.user_id, "User registered");
    record_auth_attempt("signup", "success");

    Ok(user.into())
}

/// Authenticate a user by email and password.
///
/// No session token, cookie, or persisted login state is created; each
/// login is stateless and the stored row is not modified.
pub async fn log_in(pool: &SqlitePool, request: LoginRequest) -> Result<UserSummary, AuthError> {
    let user = match users::find_by_email(pool, &request.email).await? {
        Some(user) => user,
        None => {
            record_auth_attempt("login", "unknown_email");
            return Err(AuthError::NotFound);
        }
    };

    if !crypto::verify_password(&request.password, &user.password_hash)? {
        tracing::warn!(user_id = %user.user_id, "Failed login attempt");
        record_auth_attempt("login", "bad_password");
        return Err(AuthError::InvalidCredentials);
    }

    record_auth_attempt("login", "success");

    Ok(user.into())
}
