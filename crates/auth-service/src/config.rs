use crate::crypto::{DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use std::collections::HashMap;
use std::env;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid bcrypt cost: {0}")]
    InvalidBcryptCost(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars
            .get("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?
            .clone();

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:5000".to_string());

        let bcrypt_cost = match vars.get("BCRYPT_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidBcryptCost(format!("not a number: {}", raw)))?,
            None => DEFAULT_BCRYPT_COST,
        };

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidBcryptCost(format!(
                "{} (must be {}-{})",
                bcrypt_cost, MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }

        Ok(Config {
            database_url,
            bind_address,
            bcrypt_cost,
        })
    }
}
