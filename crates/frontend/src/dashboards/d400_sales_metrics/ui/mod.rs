pub mod dashboard;

pub use dashboard::SalesMetricsDashboard;
