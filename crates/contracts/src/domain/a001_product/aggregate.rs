use crate::domain::common::{AggregateId, Identified, RecordStatus};
use serde::{Deserialize, Deserializer, Serialize};

/// Image assigned to products created through the inventory form
pub const DEFAULT_PRODUCT_IMAGE: &str = "https://images.unsplash.com/photo-1652819804299-eea887780ca7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductId)
    }

    fn first() -> Self {
        Self(i64::first())
    }

    fn successor(&self) -> Self {
        Self(self.0.successor())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price. Missing, null or negative stored values load as 0.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    /// Missing, null or negative stored values load as 0; fractions are truncated.
    #[serde(default, deserialize_with = "lenient_stock")]
    pub stock: u32,
    pub status: RecordStatus,
    pub image: String,
    /// Cumulative units sold. Display field: the top products ranking
    /// overwrites it with the quantity summed over the sale records.
    #[serde(default)]
    pub sales: u64,
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0))
}

fn lenient_stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    // `as` saturates at u32::MAX
    Ok(value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.trunc() as u32)
        .unwrap_or(0))
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Case-insensitive match on name or category, as used by the inventory search box
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}

impl Identified for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
