use axum::extract::State;
use refresh_core::domain::recommendation::{
    ports::RecommendationService, value_objects::GenerateTextInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_recommendation::validators::GenerateTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorEnvelope, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateTextResponse {
    pub content: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-recommendation",
    summary = "Generate text",
    description = "Forwards a free-text prompt to the LLM and returns its reply.",
    responses(
        (status = 200, body = GenerateTextResponse),
        (status = 400, body = ErrorEnvelope),
        (status = 500, body = ErrorEnvelope),
    ),
    request_body = GenerateTextValidator
)]
pub async fn generate_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateTextValidator>,
) -> Result<Response<GenerateTextResponse>, ApiError> {
    let content = state
        .service
        .generate_text(GenerateTextInput {
            prompt: payload.prompt,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate text: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GenerateTextResponse { content }))
}
