use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::review::ReviewRecord;

/// `{success, data, error}` wrapper every backend endpoint answers with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Payload of a successful envelope, or the backend's message (`fallback` when it sent none).
    pub fn into_data(self, fallback: &str) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Upstream(
                self.error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// `data` of `GET /reviews/reviews/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewsPayload {
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}
