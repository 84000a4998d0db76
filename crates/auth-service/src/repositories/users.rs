//! User repository module for database operations.
//!
//! The credential store behind the Authentication Service: exact-match
//! lookup by email and single-record insert over an injected pool.

use crate::errors::AuthError;
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Row shape of the users table. Identifiers are stored as hyphenated UUID
/// text and parsed at the repository boundary.
#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| AuthError::Database(format!("Invalid user_id in users table: {}", e)))?;

        Ok(User {
            user_id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

/// Get a user by email. Exact-match lookup; emails are unique.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, username, email, password_hash, created_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| AuthError::Database(format!("Failed to fetch user by email: {}", e)))?;

    row.map(UserRow::into_user).transpose()
}

/// Check whether an email is already registered.
///
/// Used for signup validation.
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, AuthError> {
    let exists: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM users
            WHERE email = ?1
        )
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .map_err(|e| AuthError::Database(format!("Failed to check email existence: {}", e)))?;

    Ok(exists.0)
}

/// Create a new user.
///
/// Returns the created user record. A unique-index violation on email maps
/// to `Conflict`, which is how concurrent duplicate signups that both pass
/// the pre-insert existence check get resolved to a single row.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let user_id = Uuid::new_v4();
    let created_at = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (user_id, username, email, password_hash, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(user_id.to_string())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AuthError::Conflict
        } else {
            AuthError::Database(format!("Failed to create user: {}", e))
        }
    })?;

    Ok(User {
        user_id,
        username: username.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        created_at,
    })
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}
