//! HTTP request handlers

pub mod auth_handler;
pub mod destinations_handler;
