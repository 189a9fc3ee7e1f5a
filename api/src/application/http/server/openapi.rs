use crate::application::http::{
    meal_recommendation::router::MealRecommendationApiDoc,
    server::api_entities::api_error::ConfigurationErrorEnvelope,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Refresh API"
    ),
    nest(
        (path = "/api/gemini", api = MealRecommendationApiDoc),
    ),
    components(schemas(ConfigurationErrorEnvelope))
)]
pub struct ApiDoc;
