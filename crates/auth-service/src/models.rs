use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account (maps to users table).
///
/// Created by signup only; never updated or deleted by this service.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user account. This is the only user shape that
/// crosses the HTTP boundary; it never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            id: user.user_id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Signup/login success response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Destination entry for the placeholder listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
}
