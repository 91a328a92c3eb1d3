pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AudienceError, AudienceResult};
pub use types::{
    AggregateMetrics, ConversionPotential, MetricComparison, SegmentDetail, SegmentRecord,
    SegmentTables, TrendPoint,
};
