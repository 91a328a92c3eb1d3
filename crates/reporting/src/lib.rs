//! Report assembly — turns the static segment tables into the display-ready
//! snapshot consumed by the dashboard, plus the seed tables for the
//! reporting period.

pub mod dashboard;
pub mod seed;

pub use dashboard::{DashboardComposer, DashboardSnapshot, EngagementSummary};
