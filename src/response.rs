use serde::Serialize;
use utoipa::ToSchema;

/// Plain `{"message": "..."}` body, used for confirmations and every error.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
