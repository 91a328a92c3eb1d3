//! Engagement-gap analysis — reel-vs-overall deltas over the period metrics.

use audience_core::{AggregateMetrics, MetricComparison};

/// Engagement rate of the reel minus the overall average. Negative means the
/// reel engages worse than the corpus even where it reaches more viewers.
pub fn engagement_gap(metrics: &AggregateMetrics) -> f64 {
    metrics.engagement_rate - metrics.overall_engagement_rate
}

/// Comparisons where the reel underperforms the overall corpus, input order
/// preserved.
pub fn weaker_metrics(comparisons: &[MetricComparison]) -> Vec<MetricComparison> {
    comparisons
        .iter()
        .filter(|m| m.delta() < 0.0)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> AggregateMetrics {
        AggregateMetrics {
            views: 984_910,
            reach: 1_244_407,
            reactions: 34_480,
            comments: 418,
            shares: 683,
            engagement_rate: 3.61,
            overall_engagement_rate: 7.16,
            completion_rate: 38.5,
            click_through_rate: 2.3,
        }
    }

    #[test]
    fn test_engagement_gap_is_negative_for_the_reel() {
        assert!((engagement_gap(&metrics()) + 3.55).abs() < 1e-9);
    }

    #[test]
    fn test_weaker_metrics_filters_and_keeps_order() {
        let comparisons = vec![
            MetricComparison::new("Engagement Rate", 3.61, 7.16),
            MetricComparison::new("Watch Time (s)", 45.2, 38.6),
            MetricComparison::new("Comments/1K Views", 0.42, 1.08),
            MetricComparison::new("Completion Rate", 38.5, 31.2),
        ];
        let weaker = weaker_metrics(&comparisons);
        assert_eq!(weaker.len(), 2);
        assert_eq!(weaker[0].name, "Engagement Rate");
        assert_eq!(weaker[1].name, "Comments/1K Views");
    }
}
