use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, inventory::entities::InventoryItem};

#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;
}
