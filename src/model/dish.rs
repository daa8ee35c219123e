use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishId(pub String);

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu catalog entry. Catalog data is load-time static; the core never
/// mutates a dish, it only snapshots dishes into cart lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    /// Unit price in integer currency units (đ).
    pub price: u64,
    pub category: String,
    pub image: String,
}
