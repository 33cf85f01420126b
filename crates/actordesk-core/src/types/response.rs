//! JSON error body returned by the `/api` routes.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `{"error": "NOT_FOUND", "message": "Actor 7 not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error kind in upper snake case.
    pub error: String,
    /// Message shown to the client.
    pub message: String,
}

impl From<&AppError> for ApiErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.kind.to_string(),
            message: err.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let body = ApiErrorResponse::from(&AppError::validation("first_name must not be empty"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "error": "VALIDATION",
                "message": "first_name must not be empty",
            })
        );
    }
}
