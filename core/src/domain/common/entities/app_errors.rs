use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy shared by every stage of the core crate.
///
/// Serializes as `{ "kind": ..., "reason": ... }` so the HTTP layer can hand the
/// raw error back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum CoreError {
    /// A required credential or setting is absent.
    #[error("{0} is not configured")]
    MissingConfiguration(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    PersistenceError(String),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_message() {
        let err = CoreError::MissingConfiguration("GOOGLE_API_KEY".to_string());
        assert_eq!(err.to_string(), "GOOGLE_API_KEY is not configured");
    }

    #[test]
    fn test_serializes_with_kind_and_reason() {
        let err = CoreError::PersistenceError("connection reset".to_string());
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "kind": "persistence_error", "reason": "connection reset" })
        );
    }

    #[test]
    fn test_unit_variant_serializes_without_reason() {
        let value = serde_json::to_value(CoreError::InternalServerError).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "internal_server_error" }));
    }
}
