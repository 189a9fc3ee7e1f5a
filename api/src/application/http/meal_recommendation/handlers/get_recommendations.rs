use axum::extract::State;
use refresh_core::domain::recommendation::{
    entities::MealRecommendation, ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecommendationsResponse {
    #[schema(example = "success")]
    pub status: String,
    pub recommendations: Vec<MealRecommendation>,
}

impl GetRecommendationsResponse {
    pub fn success(recommendations: Vec<MealRecommendation>) -> Self {
        Self {
            status: "success".to_string(),
            recommendations,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal-recommendation",
    summary = "Generate meal recommendations",
    description = "Reads the whole inventory, asks the LLM for 3-4 meals it can make and stores each suggestion as a new recommendation.",
    responses(
        (status = 200, body = GetRecommendationsResponse),
        (status = 500, description = "Pipeline failure or missing GOOGLE_API_KEY", body = ErrorEnvelope),
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let recommendations = state
        .service
        .generate_recommendations()
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate meal suggestions: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetRecommendationsResponse::success(
        recommendations,
    )))
}
