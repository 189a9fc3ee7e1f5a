use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling text-generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Fails with [`CoreError::MissingConfiguration`] when the client cannot
    /// reach the model. Never touches the network.
    fn ensure_configured(&self) -> Result<(), CoreError>;

    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
