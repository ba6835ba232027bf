//! Cross-store dashboard aggregation.

mod overview;

pub use overview::DashboardOverview;
