use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};

/// Number of most recent months kept in the monthly series
pub const MONTHLY_WINDOW: usize = 7;

/// Number of products in the top products ranking
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Chart colours assigned to categories in emission order
pub const CATEGORY_PALETTE: [&str; 5] = ["#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444"];

pub(crate) const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One point of the monthly revenue/sales chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Grouping key in format "YYYY-MM"
    pub period: String,
    /// Three-letter month label, e.g. "Aug"
    pub month: String,
    /// Units sold
    pub sales: u64,
    /// Distinct purchasing users
    pub users: usize,
    /// Revenue rounded to the nearest integer
    pub revenue: i64,
    /// Number of sale records
    pub orders: usize,
}

/// Units sold per product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

/// Revenue per region with its share of the grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    /// Revenue rounded to the nearest integer
    pub sales: i64,
    /// Share of the grand total in percent, rounded; 0 when the total is 0
    pub percentage: i64,
}

/// Every derived view of the dashboard, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub active_users: usize,
    pub active_products: usize,
    pub average_order: f64,
    pub monthly: Vec<MonthlyPoint>,
    pub categories: Vec<CategorySlice>,
    pub regions: Vec<RegionShare>,
    pub top_products: Vec<Product>,
}
