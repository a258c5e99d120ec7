pub mod dto;
pub mod service;

pub use dto::{
    CategorySlice, MonthlyPoint, RegionShare, SalesMetrics, CATEGORY_PALETTE, MONTHLY_WINDOW,
    TOP_PRODUCTS_LIMIT,
};
pub use service::{
    active_products, active_users, average_order, category_breakdown, compute_metrics,
    monthly_series, region_breakdown, top_products, total_orders, total_revenue,
};
