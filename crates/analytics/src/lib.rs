//! Segment analytics — differential ranking, conversion-potential
//! classification, and chart-ready projections over static segment tables.

pub mod analyzer;
pub mod banding;
pub mod engagement;

pub use analyzer::{
    AudienceSlice, ClassificationThresholds, ScatterPoint, SegmentAnalyzer,
};
pub use banding::PerformanceBand;
