pub mod entities;
pub mod ports;

pub use entities::InventoryItem;
pub use ports::InventoryRepository;
