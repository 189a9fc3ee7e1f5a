use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use refresh_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Rendered as the bare `{ "error": ... }` body.
    #[error("{0}")]
    Configuration(String),

    #[error("{message}")]
    Pipeline { message: String, details: Value },
}

/// Body of every failed request except configuration errors.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorEnvelope {
    #[schema(example = "error")]
    pub status: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigurationErrorEnvelope {
    #[schema(example = "GOOGLE_API_KEY is not configured")]
    pub error: String,
}

impl ErrorEnvelope {
    fn new(error: String, details: Option<Value>) -> Self {
        Self {
            status: "error".to_string(),
            error,
            details,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingConfiguration(_) => ApiError::Configuration(error.to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            _ => ApiError::Pipeline {
                message: error.to_string(),
                details: serde_json::to_value(&error).unwrap_or(Value::Null),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::new(message, None)),
            )
                .into_response(),
            ApiError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConfigurationErrorEnvelope { error: message }),
            )
                .into_response(),
            ApiError::Pipeline { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::new(message, Some(details))),
            )
                .into_response(),
        }
    }
}

/// JSON extractor that also runs `validator` rules, rejecting with 400.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_key_renders_fixed_body() {
        let error = ApiError::from(CoreError::MissingConfiguration(
            "GOOGLE_API_KEY".to_string(),
        ));
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "GOOGLE_API_KEY is not configured" })
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_renders_envelope_with_details() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "LLM API returned error: 429 Too Many Requests - quota".to_string(),
        ));
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({
                "status": "error",
                "error": "LLM API returned error: 429 Too Many Requests - quota",
                "details": {
                    "kind": "external_service_error",
                    "reason": "LLM API returned error: 429 Too Many Requests - quota"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_persistence_failure_is_500() {
        let (status, body) = render(ApiError::from(CoreError::PersistenceError(
            "Failed to create meal recommendation: timeout".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["details"]["kind"], "persistence_error");
    }

    #[tokio::test]
    async fn test_invalid_input_is_400_without_details() {
        let (status, body) = render(ApiError::from(CoreError::Invalid(
            "prompt must not be empty".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "status": "error", "error": "prompt must not be empty" })
        );
    }
}
