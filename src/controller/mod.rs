//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs, call
//! into the service layer, and map results back to HTTP responses. All
//! business logic lives in the services.

pub mod auth;
pub mod settings;
