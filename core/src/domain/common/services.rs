use std::time::Duration;

use crate::domain::{
    inventory::ports::InventoryRepository, llm::ports::LLMClient,
    recommendation::ports::RecommendationRepository,
};

/// Wires the ports together; domain services are implemented on this type.
#[derive(Clone, Debug)]
pub struct Service<I, R, LLM>
where
    I: InventoryRepository,
    R: RecommendationRepository,
    LLM: LLMClient,
{
    pub(crate) inventory_repository: I,
    pub(crate) recommendation_repository: R,
    pub(crate) llm_client: LLM,
    pub(crate) pipeline_deadline: Duration,
}

impl<I, R, LLM> Service<I, R, LLM>
where
    I: InventoryRepository,
    R: RecommendationRepository,
    LLM: LLMClient,
{
    pub fn new(
        inventory_repository: I,
        recommendation_repository: R,
        llm_client: LLM,
        pipeline_deadline: Duration,
    ) -> Self {
        Self {
            inventory_repository,
            recommendation_repository,
            llm_client,
            pipeline_deadline,
        }
    }
}
