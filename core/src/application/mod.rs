use tracing::info;

use crate::{
    domain::{
        common::{RefreshConfig, entities::app_errors::CoreError, services::Service},
        llm::ports::LLMClient,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        inventory::PostgresInventoryRepository,
        llm::GeminiLLMClient,
        recommendation::PostgresRecommendationRepository,
    },
};

pub type RefreshService =
    Service<PostgresInventoryRepository, PostgresRecommendationRepository, GeminiLLMClient>;

/// Builds the database pool and model client once and injects them into the service.
pub async fn create_service(config: RefreshConfig) -> Result<RefreshService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let llm_client = GeminiLLMClient::new(config.llm.clone())?;
    if let Err(e) = llm_client.ensure_configured() {
        tracing::warn!("{}, generation requests will fail", e);
    }

    info!(model = %config.llm.gemini_model, "Service initialized");

    Ok(Service::new(
        PostgresInventoryRepository::new(postgres.get_db()),
        PostgresRecommendationRepository::new(postgres.get_db()),
        llm_client,
        config.pipeline.deadline,
    ))
}
