use super::handlers::generate_text::{__path_generate_text, generate_text};
use super::handlers::get_recommendations::{__path_get_recommendations, get_recommendations};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recommendations, generate_text))]
pub struct MealRecommendationApiDoc;

pub fn meal_recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/gemini", state.args.server.root_path),
        get(get_recommendations).post(generate_text),
    )
}
