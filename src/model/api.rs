use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Stable machine-readable error code (e.g. `forbidden`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional diagnostic details (upstream error text and similar).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

/// Response body for `GET /api/auth/user`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    /// The authenticated user's Discord ID, as a string.
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl ErrorDto {
    /// Creates an error body with no details attached.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches diagnostic details to the error body.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
