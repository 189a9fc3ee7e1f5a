use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::MealRecommendation, value_objects::GenerateTextInput},
};

/// Repository trait for stored meal recommendations
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationRepository: Send + Sync {
    fn create_recommendation(
        &self,
        recommendation: MealRecommendation,
    ) -> impl Future<Output = Result<MealRecommendation, CoreError>> + Send;
}

/// Service trait for meal recommendation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    /// Reads the inventory, asks the model for meals and stores what it suggests.
    fn generate_recommendations(
        &self,
    ) -> impl Future<Output = Result<Vec<MealRecommendation>, CoreError>> + Send;

    /// Forwards a free-text prompt to the model and returns its reply.
    fn generate_text(
        &self,
        input: GenerateTextInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
