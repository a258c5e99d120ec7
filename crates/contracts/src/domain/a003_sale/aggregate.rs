use crate::domain::a001_product::ProductId;
use crate::domain::a002_user::UserId;
use crate::domain::common::{AggregateId, Identified};
use serde::{Deserialize, Serialize};

/// Fixed set of sales regions
pub const REGIONS: [&str; 5] = ["North America", "Europe", "Asia", "South America", "Others"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub i64);

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(SaleId)
    }

    fn first() -> Self {
        Self(i64::first())
    }

    fn successor(&self) -> Self {
        Self(self.0.successor())
    }
}

/// Historical sale fact. Generated once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    /// May reference a product that has since been deleted
    pub product_id: ProductId,
    pub user_id: UserId,
    /// Unit price at the time of sale
    pub amount: f64,
    pub quantity: u32,
    /// Calendar day, `YYYY-MM-DD`
    pub date: String,
    pub region: String,
}

impl Sale {
    /// amount × quantity
    pub fn revenue(&self) -> f64 {
        self.amount * f64::from(self.quantity)
    }

    /// Year-month key (`YYYY-MM`), the first seven characters of the date.
    /// Shorter dates are used whole.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }
}

impl Identified for Sale {
    type Id = SaleId;

    fn id(&self) -> SaleId {
        self.id
    }
}
