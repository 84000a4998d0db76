//! Password hashing.
//!
//! bcrypt with a per-call random salt embedded in the modular-crypt hash
//! string, so verification needs no separate salt storage.

use crate::errors::AuthError;
use tracing::instrument;

/// Default bcrypt cost factor (2^10 iterations).
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Minimum accepted bcrypt cost. Below this, brute-forcing stored hashes
/// becomes cheap (OWASP recommends 10+ as of 2024).
pub const MIN_BCRYPT_COST: u32 = 10;

/// Maximum accepted bcrypt cost. Above this, hashing latency on the signup
/// and login paths becomes excessive (~800ms+).
pub const MAX_BCRYPT_COST: u32 = 14;

/// Hash a password with bcrypt using a configurable cost factor.
///
/// # Errors
///
/// Returns `AuthError::Crypto` if:
/// - Cost is outside the valid range (10-14), even though config should
///   have already validated it
/// - Bcrypt hashing fails
#[instrument(skip_all)]
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(AuthError::Crypto(format!(
            "Invalid bcrypt cost: {} (must be {}-{})",
            cost, MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )));
    }

    bcrypt::hash(password, cost)
        .map_err(|e| AuthError::Crypto(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored bcrypt hash.
///
/// The bcrypt routine compares in constant time; callers must never fall
/// back to string equality on the hash.
#[instrument(skip_all)]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AuthError::Crypto(format!("Password verification failed: {}", e)))
}
