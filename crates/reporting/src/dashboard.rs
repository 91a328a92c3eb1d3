//! Dashboard snapshot — display-ready derived views over one reporting
//! period.

use audience_analytics::{engagement, AudienceSlice, ScatterPoint, SegmentAnalyzer};
use audience_core::config::ReportConfig;
use audience_core::{
    AggregateMetrics, AudienceResult, MetricComparison, SegmentRecord, SegmentTables, TrendPoint,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reel-vs-overall engagement rollup for the engagement tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub comparisons: Vec<MetricComparison>,
    /// Reel engagement rate minus overall rate.
    pub gap: f64,
    /// Comparisons where the reel underperforms.
    pub weaker: Vec<MetricComparison>,
}

/// Everything the presentation layer needs to render one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Demographic rows ranked by differential descending.
    pub demographics: Vec<SegmentRecord>,
    /// Country rows ranked by differential, truncated to the configured top-N.
    pub countries: Vec<SegmentRecord>,
    /// Ranked country rows with a positive differential.
    pub overperforming_countries: Vec<SegmentRecord>,
    /// Localization approaches of the leading overperformers.
    pub localization_highlights: Vec<String>,
    /// Size-vs-performance scatter over the demographic table.
    pub scatter: Vec<ScatterPoint>,
    /// Largest audience slices by focus share.
    pub audience_distribution: Vec<AudienceSlice>,
    /// Education rows in editorial order.
    pub education: Vec<SegmentRecord>,
    /// Unique interest tags, most relevant segments first.
    pub interest_categories: Vec<String>,
    pub engagement: EngagementSummary,
    pub metrics: AggregateMetrics,
    pub trend: Vec<TrendPoint>,
    pub generated_at: DateTime<Utc>,
}

/// Assembles `DashboardSnapshot`s from static tables. Stateless apart from
/// the analyzer thresholds and the report tunables.
pub struct DashboardComposer {
    analyzer: SegmentAnalyzer,
    config: ReportConfig,
}

impl DashboardComposer {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            analyzer: SegmentAnalyzer::new(),
            config,
        }
    }

    pub fn with_analyzer(analyzer: SegmentAnalyzer, config: ReportConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn compose(
        &self,
        tables: &SegmentTables,
        metrics: &AggregateMetrics,
        comparisons: &[MetricComparison],
        trend: &[TrendPoint],
    ) -> AudienceResult<DashboardSnapshot> {
        let demographics = self.analyzer.rank_by_difference(&tables.demographics);
        let ranked_countries = self.analyzer.rank_by_difference(&tables.countries);
        let countries = self
            .analyzer
            .top_n(&ranked_countries, self.config.top_countries)?;
        let overperforming_countries = self.analyzer.filter_positive(&countries);
        let localization_highlights = overperforming_countries
            .iter()
            .take(self.config.localization_highlights)
            .filter_map(|c| c.localized_approach().map(|a| a.to_string()))
            .collect();

        let scatter = self.analyzer.project_for_scatter(&tables.demographics);
        let audience_distribution = self
            .analyzer
            .audience_distribution(&tables.demographics, self.config.distribution_slices)?;
        // Interests are flattened from the ranked rows so the strongest
        // segments contribute first.
        let interest_categories = self
            .analyzer
            .aggregate_unique_interests(&demographics, self.config.interest_limit)?;

        let engagement = EngagementSummary {
            comparisons: comparisons.to_vec(),
            gap: engagement::engagement_gap(metrics),
            weaker: engagement::weaker_metrics(comparisons),
        };

        info!(
            demographics = demographics.len(),
            countries = countries.len(),
            overperforming = overperforming_countries.len(),
            "Dashboard snapshot assembled"
        );

        Ok(DashboardSnapshot {
            demographics,
            countries,
            overperforming_countries,
            localization_highlights,
            scatter,
            audience_distribution,
            education: tables.education.clone(),
            interest_categories,
            engagement,
            metrics: metrics.clone(),
            trend: trend.to_vec(),
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_snapshot_from_seed_tables() {
        let composer = DashboardComposer::new(ReportConfig::default());
        let tables = seed::segment_tables();
        let snapshot = composer
            .compose(
                &tables,
                &seed::aggregate_metrics(),
                &seed::metric_comparisons(),
                &seed::trend(),
            )
            .unwrap();

        // Ranking: strongest demographic first, weakest last.
        assert_eq!(snapshot.demographics[0].name, "Female, 25-34");
        assert_eq!(
            snapshot.demographics[snapshot.demographics.len() - 1].name,
            "Male, 35-44"
        );

        // Country rows capped at the configured top-N.
        assert!(snapshot.countries.len() <= 7);
        assert_eq!(snapshot.countries[0].name, "United Kingdom");

        // Overperformers are all positive and lead the ranked order.
        assert_eq!(snapshot.overperforming_countries.len(), 5);
        assert!(snapshot
            .overperforming_countries
            .iter()
            .all(|c| c.difference() > 0.0));
        assert_eq!(snapshot.localization_highlights.len(), 3);

        // Scatter stays 1:1 with the demographic input.
        assert_eq!(snapshot.scatter.len(), tables.demographics.len());

        // Distribution: five slices, largest focus share first.
        assert_eq!(snapshot.audience_distribution.len(), 5);
        assert_eq!(snapshot.audience_distribution[0].name, "Male, 25-34");

        // Interests are unique and capped.
        let unique: std::collections::HashSet<_> =
            snapshot.interest_categories.iter().collect();
        assert_eq!(unique.len(), snapshot.interest_categories.len());
        assert!(snapshot.interest_categories.len() <= 12);

        // The reel engages below the corpus average.
        assert!(snapshot.engagement.gap < 0.0);
        assert!(!snapshot.engagement.weaker.is_empty());
    }
}
