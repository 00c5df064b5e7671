//! Domain models and request/response types.
//!
//! Param models decouple the service layer from external representations:
//! Discord REST responses are converted into profile structs at the
//! collaborator boundary, and HTTP bodies are converted into typed DTOs at
//! the controller boundary.

pub mod api;
pub mod discord;
pub mod settings;
