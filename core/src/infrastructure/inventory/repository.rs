use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{entities::InventoryItem, ports::InventoryRepository},
    },
    entity::items::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, CoreError> {
        let items = Entity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch inventory items: {}", e);
                CoreError::PersistenceError(format!("Failed to fetch inventory items: {}", e))
            })?
            .into_iter()
            .map(InventoryItem::from)
            .collect::<Vec<InventoryItem>>();

        Ok(items)
    }
}
