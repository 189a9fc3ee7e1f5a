use crate::{domain::inventory::entities::InventoryItem, entity::items};

impl From<items::Model> for InventoryItem {
    fn from(model: items::Model) -> Self {
        Self {
            name: model.name,
            category: model.category,
            quantity: model.quantity,
            confidence: model.confidence,
            expiration_date: model.expiration_date,
            added_at: model.added_at,
        }
    }
}
