use futures::future::try_join_all;
use tracing::{debug, error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    inventory::ports::InventoryRepository,
    llm::ports::LLMClient,
    recommendation::{
        entities::{MealRecommendation, MealSuggestion},
        parser::partition_reply,
        ports::{RecommendationRepository, RecommendationService},
        prompt::build_meal_suggestion_prompt,
        value_objects::GenerateTextInput,
    },
};

/// Keeps the well-formed lines of a reply. Malformed lines are logged and
/// dropped; a reply where every line is malformed is rejected.
pub fn accept_suggestions(reply: &str) -> Result<Vec<MealSuggestion>, CoreError> {
    let (suggestions, malformed) = partition_reply(reply);

    for line in &malformed {
        warn!(
            line_number = line.line_number,
            content = %line.content,
            "Skipping malformed recommendation line"
        );
    }

    if suggestions.is_empty() && !malformed.is_empty() {
        error!(
            "LLM reply had {} lines and none matched the `emoji | name` format",
            malformed.len()
        );
        return Err(CoreError::MalformedResponse(format!(
            "No line of the LLM reply matched the `emoji | name` format ({} malformed)",
            malformed.len()
        )));
    }

    Ok(suggestions)
}

impl<I, R, LLM> Service<I, R, LLM>
where
    I: InventoryRepository,
    R: RecommendationRepository,
    LLM: LLMClient,
{
    async fn run_recommendation_pipeline(&self) -> Result<Vec<MealRecommendation>, CoreError> {
        // 1. Read inventory
        let inventory = self.inventory_repository.fetch_all().await?;
        if inventory.is_empty() {
            warn!("Inventory is empty, asking for meal suggestions anyway");
        }

        // 2. Build prompt
        let prompt = build_meal_suggestion_prompt(&inventory);
        debug!(items = inventory.len(), "Built meal suggestion prompt");

        // 3. Call LLM
        let reply = self.llm_client.generate_text(prompt).await?;

        // 4. Parse reply
        let suggestions = accept_suggestions(&reply)?;

        // 5. Store every suggestion; the first failed write aborts the batch
        let recommendations = try_join_all(suggestions.into_iter().map(|suggestion| {
            self.recommendation_repository
                .create_recommendation(MealRecommendation::new(suggestion))
        }))
        .await?;

        info!(
            count = recommendations.len(),
            "Stored meal recommendations"
        );

        Ok(recommendations)
    }

    fn deadline_exceeded(&self, operation: &str) -> CoreError {
        error!(
            "{} exceeded its deadline of {:?}",
            operation, self.pipeline_deadline
        );
        CoreError::Timeout(format!(
            "{} did not finish within {}s",
            operation,
            self.pipeline_deadline.as_secs_f64()
        ))
    }
}

impl<I, R, LLM> RecommendationService for Service<I, R, LLM>
where
    I: InventoryRepository,
    R: RecommendationRepository,
    LLM: LLMClient,
{
    async fn generate_recommendations(&self) -> Result<Vec<MealRecommendation>, CoreError> {
        self.llm_client.ensure_configured()?;

        tokio::time::timeout(self.pipeline_deadline, self.run_recommendation_pipeline())
            .await
            .map_err(|_| self.deadline_exceeded("Recommendation pipeline"))?
    }

    async fn generate_text(&self, input: GenerateTextInput) -> Result<String, CoreError> {
        self.llm_client.ensure_configured()?;

        if input.prompt.trim().is_empty() {
            return Err(CoreError::Invalid("prompt must not be empty".to_string()));
        }

        tokio::time::timeout(
            self.pipeline_deadline,
            self.llm_client.generate_text(input.prompt),
        )
        .await
        .map_err(|_| self.deadline_exceeded("Text generation"))?
    }
}
