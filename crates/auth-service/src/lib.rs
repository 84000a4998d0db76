//! GlobeTrotter Auth Service Library
//!
//! This library provides the backend for the GlobeTrotter travel-planning
//! application: stateless signup/login against a durable credential store,
//! plus the placeholder destinations listing the frontend consumes.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `crypto` - Password hashing
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Data models
//! - `repositories` - Database access layer
//! - `routes` - Router assembly
//! - `services` - Business logic layer

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
