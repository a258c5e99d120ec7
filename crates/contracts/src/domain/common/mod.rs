//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod record_status;

// Re-exports
pub use aggregate_id::{next_id, AggregateId, Identified};
pub use record_status::RecordStatus;
