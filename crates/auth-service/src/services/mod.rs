//! Business logic layer

pub mod auth_service;
