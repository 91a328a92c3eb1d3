//! Strategy registry — name-keyed lookup of authored conversion strategies.

use audience_core::ConversionPotential;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    Demographic,
    Geographic,
}

/// An authored action plan for one segment: messaging, calls-to-action, and
/// revenue expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub id: Uuid,
    /// Segment name this plan targets; the lookup key.
    pub segment: String,
    pub segment_type: SegmentType,
    pub potential: ConversionPotential,
    pub approach: String,
    pub ctas: Vec<String>,
    pub targeted_content: Vec<String>,
    /// Expected conversion rate, percent.
    pub estimated_conversion_rate: f64,
    /// Expected revenue, USD.
    pub potential_revenue: f64,
}

impl StrategyRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        segment: impl Into<String>,
        segment_type: SegmentType,
        potential: ConversionPotential,
        approach: impl Into<String>,
        ctas: Vec<String>,
        targeted_content: Vec<String>,
        estimated_conversion_rate: f64,
        potential_revenue: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            segment: segment.into(),
            segment_type,
            potential,
            approach: approach.into(),
            ctas,
            targeted_content,
            estimated_conversion_rate,
            potential_revenue,
        }
    }
}

/// Registry of strategies, built once from static configuration at startup
/// and never mutated afterwards.
///
/// A segment with no authored strategy is a normal outcome: `lookup` returns
/// `None` and the caller suppresses its detail panel rather than rendering
/// empty fields.
pub struct StrategyIndex {
    strategies: dashmap::DashMap<String, StrategyRecord>,
}

impl StrategyIndex {
    pub fn new() -> Self {
        Self {
            strategies: dashmap::DashMap::new(),
        }
    }

    pub fn from_records(records: Vec<StrategyRecord>) -> Self {
        let index = Self::new();
        for record in records {
            index.register(record);
        }
        debug!(count = index.len(), "Strategy index built");
        index
    }

    pub fn register(&self, record: StrategyRecord) {
        self.strategies.insert(record.segment.clone(), record);
    }

    pub fn lookup(&self, segment: &str) -> Option<StrategyRecord> {
        self.strategies.get(segment).map(|s| s.clone())
    }

    pub fn list(&self) -> Vec<StrategyRecord> {
        self.strategies.iter().map(|s| s.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyIndex {
    fn default() -> Self {
        Self::new()
    }
}
