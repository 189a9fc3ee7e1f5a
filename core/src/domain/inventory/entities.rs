/// A stored food item as scanned into the pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub name: String,
    /// Grouping key, compared by exact string equality.
    pub category: String,
    pub quantity: f64,
    pub confidence: Option<f64>,
    pub expiration_date: Option<String>,
    pub added_at: Option<String>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            confidence: None,
            expiration_date: None,
            added_at: None,
        }
    }
}
