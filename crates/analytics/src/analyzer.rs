//! Core derivation layer — turns raw segment rows into ordered, classified,
//! and projected views for the dashboard.

use audience_core::{AudienceError, AudienceResult, ConversionPotential, SegmentRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bucket boundaries for computed classification. Upper branches are
/// inclusive exactly as written; first match wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub rate_very_high: f64,
    pub rate_high: f64,
    pub rate_medium: f64,
    pub diff_very_high: f64,
    pub diff_high: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            rate_very_high: 4.0,
            rate_high: 3.0,
            rate_medium: 2.0,
            diff_very_high: 2.0,
            diff_high: 1.0,
        }
    }
}

/// One point of the size-vs-performance scatter. Output order matches the
/// input rows 1:1 so tooltips can re-join by index or name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub name: String,
    /// Absolute view count (x-axis).
    pub audience_size: u64,
    /// Performance differential, percent (y-axis).
    pub differential: f64,
    /// Estimated conversion rate, percent (bubble size); 0.0 when the row
    /// carries no rate.
    pub conversion_rate: f64,
}

/// One slice of the audience-distribution pie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudienceSlice {
    pub name: String,
    pub percentage: f64,
    pub views: u64,
}

/// Pure, deterministic analytics over immutable segment tables. Never
/// mutates its input; every operation returns a fresh view.
#[derive(Debug, Clone, Default)]
pub struct SegmentAnalyzer {
    thresholds: ClassificationThresholds,
}

impl SegmentAnalyzer {
    pub fn new() -> Self {
        Self::with_thresholds(ClassificationThresholds::default())
    }

    pub fn with_thresholds(thresholds: ClassificationThresholds) -> Self {
        debug!(?thresholds, "Segment analyzer initialized");
        Self { thresholds }
    }

    /// Classify a loose rate/differential pair into a potential tier.
    ///
    /// The rate path takes precedence whenever a rate is present; the
    /// differential path is the fallback. With neither metric the input is
    /// unclassifiable and the call fails with `MissingMetric`.
    pub fn classify(
        &self,
        rate: Option<f64>,
        difference: Option<f64>,
    ) -> AudienceResult<ConversionPotential> {
        if let Some(rate) = rate {
            let t = &self.thresholds;
            return Ok(if rate >= t.rate_very_high {
                ConversionPotential::VeryHigh
            } else if rate >= t.rate_high {
                ConversionPotential::High
            } else if rate >= t.rate_medium {
                ConversionPotential::Medium
            } else {
                ConversionPotential::Low
            });
        }

        if let Some(diff) = difference {
            let t = &self.thresholds;
            return Ok(if diff > t.diff_very_high {
                ConversionPotential::VeryHigh
            } else if diff > t.diff_high {
                ConversionPotential::High
            } else if diff >= 0.0 {
                ConversionPotential::Medium
            } else {
                ConversionPotential::Low
            });
        }

        Err(AudienceError::MissingMetric {
            segment: "<unnamed>".to_string(),
        })
    }

    /// Computed-threshold classification of a record. This is deliberately
    /// separate from the editorial `record.potential` field; callers choose
    /// which path to surface.
    pub fn classify_record(
        &self,
        record: &SegmentRecord,
    ) -> AudienceResult<ConversionPotential> {
        self.classify(record.conversion_rate(), Some(record.difference()))
            .map_err(|_| AudienceError::MissingMetric {
                segment: record.name.clone(),
            })
    }

    /// Rows sorted by differential descending. The sort is stable: rows with
    /// equal differentials keep their input order, so later top-N truncation
    /// is deterministic.
    pub fn rank_by_difference(&self, records: &[SegmentRecord]) -> Vec<SegmentRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| b.difference().total_cmp(&a.difference()));
        sorted
    }

    /// First `n` rows (or fewer if the table is smaller).
    pub fn top_n(
        &self,
        records: &[SegmentRecord],
        n: usize,
    ) -> AudienceResult<Vec<SegmentRecord>> {
        if n == 0 {
            return Err(AudienceError::InvalidArgument(
                "top-n count must be positive".to_string(),
            ));
        }
        Ok(records.iter().take(n).cloned().collect())
    }

    /// Overperforming rows only: differential strictly above zero, input
    /// order preserved.
    pub fn filter_positive(&self, records: &[SegmentRecord]) -> Vec<SegmentRecord> {
        records
            .iter()
            .filter(|r| r.difference() > 0.0)
            .cloned()
            .collect()
    }

    /// Project rows to scatter coordinates, 1:1 and order-preserving.
    pub fn project_for_scatter(&self, records: &[SegmentRecord]) -> Vec<ScatterPoint> {
        records
            .iter()
            .map(|r| ScatterPoint {
                name: r.name.clone(),
                audience_size: r.views,
                differential: r.difference(),
                conversion_rate: r.conversion_rate().unwrap_or(0.0),
            })
            .collect()
    }

    /// Top `n` rows by focus share, projected to pie slices.
    pub fn audience_distribution(
        &self,
        records: &[SegmentRecord],
        n: usize,
    ) -> AudienceResult<Vec<AudienceSlice>> {
        if n == 0 {
            return Err(AudienceError::InvalidArgument(
                "distribution slice count must be positive".to_string(),
            ));
        }
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| b.focus_pct.total_cmp(&a.focus_pct));
        Ok(sorted
            .iter()
            .take(n)
            .map(|r| AudienceSlice {
                name: r.name.clone(),
                percentage: r.focus_pct,
                views: r.views,
            })
            .collect())
    }

    /// Flatten interest tags across rows, dedupe keeping first occurrence,
    /// cap at `limit`.
    ///
    /// Order is the flattening traversal order, not sorted: when the caller
    /// ranks rows first, earlier interests belong to higher-differential
    /// segments and stay in front.
    pub fn aggregate_unique_interests(
        &self,
        records: &[SegmentRecord],
        limit: usize,
    ) -> AudienceResult<Vec<String>> {
        if limit == 0 {
            return Err(AudienceError::InvalidArgument(
                "interest limit must be positive".to_string(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for record in records {
            for interest in record.interests() {
                if out.len() == limit {
                    return Ok(out);
                }
                if seen.insert(interest.clone()) {
                    out.push(interest.clone());
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audience_core::SegmentRecord;

    fn demographics() -> Vec<SegmentRecord> {
        vec![
            SegmentRecord::demographic(
                "Female, 25-34",
                17.4,
                12.52,
                171_381,
                4.2,
                ConversionPotential::VeryHigh,
                vec![
                    "Career Development".to_string(),
                    "Professional Growth".to_string(),
                ],
            ),
            SegmentRecord::demographic(
                "Male, 45-54",
                10.72,
                8.64,
                105_568,
                3.8,
                ConversionPotential::High,
                vec![
                    "Career Transition".to_string(),
                    "Digital Literacy".to_string(),
                ],
            ),
            SegmentRecord::demographic(
                "Male, 25-34",
                26.26,
                26.8,
                258_647,
                2.7,
                ConversionPotential::Medium,
                vec![
                    "Technical Skills".to_string(),
                    "Career Development".to_string(),
                ],
            ),
            SegmentRecord::demographic(
                "Male, 35-44",
                5.74,
                9.84,
                56_493,
                1.5,
                ConversionPotential::Low,
                vec!["Management Skills".to_string()],
            ),
        ]
    }

    #[test]
    fn test_classify_by_rate_boundaries() {
        let analyzer = SegmentAnalyzer::new();
        assert_eq!(
            analyzer.classify(Some(4.0), None).unwrap(),
            ConversionPotential::VeryHigh
        );
        assert_eq!(
            analyzer.classify(Some(3.0), None).unwrap(),
            ConversionPotential::High
        );
        assert_eq!(
            analyzer.classify(Some(2.0), None).unwrap(),
            ConversionPotential::Medium
        );
        assert_eq!(
            analyzer.classify(Some(1.99), None).unwrap(),
            ConversionPotential::Low
        );
    }

    #[test]
    fn test_classify_by_difference_boundaries() {
        let analyzer = SegmentAnalyzer::new();
        // Exactly 2.0 is not above the very-high bound.
        assert_eq!(
            analyzer.classify(None, Some(2.0)).unwrap(),
            ConversionPotential::High
        );
        assert_eq!(
            analyzer.classify(None, Some(2.01)).unwrap(),
            ConversionPotential::VeryHigh
        );
        assert_eq!(
            analyzer.classify(None, Some(1.0)).unwrap(),
            ConversionPotential::Medium
        );
        assert_eq!(
            analyzer.classify(None, Some(0.0)).unwrap(),
            ConversionPotential::Medium
        );
        assert_eq!(
            analyzer.classify(None, Some(-0.1)).unwrap(),
            ConversionPotential::Low
        );
    }

    #[test]
    fn test_rate_path_takes_precedence() {
        let analyzer = SegmentAnalyzer::new();
        // Strong differential but weak rate: the rate decides.
        assert_eq!(
            analyzer.classify(Some(1.5), Some(4.88)).unwrap(),
            ConversionPotential::Low
        );
    }

    #[test]
    fn test_classify_without_metrics_fails() {
        let analyzer = SegmentAnalyzer::new();
        let err = analyzer.classify(None, None).unwrap_err();
        assert!(matches!(err, AudienceError::MissingMetric { .. }));
    }

    #[test]
    fn test_classify_record_examples() {
        let analyzer = SegmentAnalyzer::new();
        let records = demographics();
        assert_eq!(
            analyzer.classify_record(&records[0]).unwrap(),
            ConversionPotential::VeryHigh
        );
        assert_eq!(
            analyzer.classify_record(&records[3]).unwrap(),
            ConversionPotential::Low
        );
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let analyzer = SegmentAnalyzer::new();
        let ranked = analyzer.rank_by_difference(&demographics());
        assert_eq!(ranked[0].name, "Female, 25-34");
        assert_eq!(ranked[ranked.len() - 1].name, "Male, 35-44");

        // Two rows with an identical differential keep input order.
        let tied = vec![
            SegmentRecord::country("A", 5.0, 3.0, 10, ConversionPotential::Medium, None),
            SegmentRecord::country("B", 7.0, 5.0, 20, ConversionPotential::Medium, None),
            SegmentRecord::country("C", 1.0, 0.0, 5, ConversionPotential::Medium, None),
        ];
        let ranked = analyzer.rank_by_difference(&tied);
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[1].name, "B");
        assert_eq!(ranked[2].name, "C");
    }

    #[test]
    fn test_top_n_truncates_and_validates() {
        let analyzer = SegmentAnalyzer::new();
        let records = demographics();
        assert_eq!(analyzer.top_n(&records, 2).unwrap().len(), 2);
        assert_eq!(analyzer.top_n(&records, 100).unwrap().len(), records.len());
        assert!(matches!(
            analyzer.top_n(&records, 0),
            Err(AudienceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter_positive_keeps_order() {
        let analyzer = SegmentAnalyzer::new();
        let positive = analyzer.filter_positive(&demographics());
        assert_eq!(positive.len(), 2);
        assert_eq!(positive[0].name, "Female, 25-34");
        assert_eq!(positive[1].name, "Male, 45-54");
        assert!(positive.iter().all(|r| r.difference() > 0.0));
    }

    #[test]
    fn test_scatter_projection_is_one_to_one() {
        let analyzer = SegmentAnalyzer::new();
        let records = demographics();
        let points = analyzer.project_for_scatter(&records);
        assert_eq!(points.len(), records.len());
        for (point, record) in points.iter().zip(&records) {
            assert_eq!(point.name, record.name);
            assert_eq!(point.audience_size, record.views);
            assert!((point.differential - record.difference()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scatter_defaults_missing_rate_to_zero() {
        let analyzer = SegmentAnalyzer::new();
        let countries = vec![SegmentRecord::country(
            "Qatar",
            2.87,
            1.1,
            28_258,
            ConversionPotential::High,
            None,
        )];
        let points = analyzer.project_for_scatter(&countries);
        assert_eq!(points[0].conversion_rate, 0.0);
    }

    #[test]
    fn test_audience_distribution() {
        let analyzer = SegmentAnalyzer::new();
        let slices = analyzer.audience_distribution(&demographics(), 3).unwrap();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].name, "Male, 25-34");
        assert_eq!(slices[1].name, "Female, 25-34");
        assert!(slices[0].percentage >= slices[1].percentage);
        assert!(matches!(
            analyzer.audience_distribution(&demographics(), 0),
            Err(AudienceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_interest_aggregation_dedupes_in_order() {
        let analyzer = SegmentAnalyzer::new();
        let interests = analyzer
            .aggregate_unique_interests(&demographics(), 12)
            .unwrap();
        // "Career Development" appears in two rows but is kept once, at its
        // first position.
        assert_eq!(interests[0], "Career Development");
        assert_eq!(
            interests
                .iter()
                .filter(|i| *i == "Career Development")
                .count(),
            1
        );
        let unique: std::collections::HashSet<_> = interests.iter().collect();
        assert_eq!(unique.len(), interests.len());

        let capped = analyzer
            .aggregate_unique_interests(&demographics(), 3)
            .unwrap();
        assert_eq!(capped.len(), 3);
        assert!(matches!(
            analyzer.aggregate_unique_interests(&demographics(), 0),
            Err(AudienceError::InvalidArgument(_))
        ));
    }
}
