use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recommendation::{entities::MealRecommendation, ports::RecommendationRepository},
    },
    entity::recommendations::{ActiveModel, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecommendationRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecommendationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecommendationRepository for PostgresRecommendationRepository {
    async fn create_recommendation(
        &self,
        recommendation: MealRecommendation,
    ) -> Result<MealRecommendation, CoreError> {
        let active_model = ActiveModel {
            id: Set(recommendation.id),
            image: Set(recommendation.image),
            name: Set(recommendation.name),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal recommendation: {}", e);
                CoreError::PersistenceError(format!("Failed to create meal recommendation: {}", e))
            })?;

        Ok(MealRecommendation::from(created))
    }
}
