use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse ordinal tier used to prioritize follow-up strategy per segment.
///
/// Ordering matches priority: `VeryHigh` sorts above `High`, and so on.
/// `Unknown` covers rows shipped without an editorial label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConversionPotential {
    VeryHigh,
    High,
    Medium,
    Low,
    Unknown,
}

impl std::fmt::Display for ConversionPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConversionPotential::VeryHigh => "Very High",
            ConversionPotential::High => "High",
            ConversionPotential::Medium => "Medium",
            ConversionPotential::Low => "Low",
            ConversionPotential::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Variant-specific fields of a segment row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentDetail {
    Demographic {
        /// Estimated conversion rate for this group, percent.
        conversion_rate: f64,
        interests: Vec<String>,
    },
    Country {
        localized_approach: Option<String>,
    },
    EducationLevel,
}

/// One row of a segment table: a named audience slice with its share of views
/// for the analyzed content (`focus_pct`) and for the overall corpus
/// (`baseline_pct`).
///
/// The differential is always computed from the two marginals, never stored,
/// so a stale stored value cannot drift from the formula. Records are built
/// once from static input and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentRecord {
    pub name: String,
    /// Share of views for the analyzed content, in [0, 100].
    pub focus_pct: f64,
    /// Share of views in the reference corpus, in [0, 100].
    pub baseline_pct: f64,
    pub views: u64,
    /// Editorial tier shipped with the row. Distinct from the tier the
    /// analyzer computes from thresholds.
    pub potential: ConversionPotential,
    pub detail: SegmentDetail,
}

impl SegmentRecord {
    pub fn demographic(
        name: impl Into<String>,
        focus_pct: f64,
        baseline_pct: f64,
        views: u64,
        conversion_rate: f64,
        potential: ConversionPotential,
        interests: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            focus_pct,
            baseline_pct,
            views,
            potential,
            detail: SegmentDetail::Demographic {
                conversion_rate,
                interests,
            },
        }
    }

    pub fn country(
        name: impl Into<String>,
        focus_pct: f64,
        baseline_pct: f64,
        views: u64,
        potential: ConversionPotential,
        localized_approach: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            focus_pct,
            baseline_pct,
            views,
            potential,
            detail: SegmentDetail::Country { localized_approach },
        }
    }

    pub fn education_level(
        name: impl Into<String>,
        focus_pct: f64,
        potential: ConversionPotential,
    ) -> Self {
        // Education rows ship with only a focus share and an editorial tier.
        Self {
            name: name.into(),
            focus_pct,
            baseline_pct: 0.0,
            views: 0,
            potential,
            detail: SegmentDetail::EducationLevel,
        }
    }

    /// Performance differential: focus share minus baseline share. Positive
    /// means the segment is overrepresented in the analyzed content.
    pub fn difference(&self) -> f64 {
        self.focus_pct - self.baseline_pct
    }

    /// Estimated conversion rate, present for demographic rows only.
    pub fn conversion_rate(&self) -> Option<f64> {
        match &self.detail {
            SegmentDetail::Demographic {
                conversion_rate, ..
            } => Some(*conversion_rate),
            _ => None,
        }
    }

    /// Interest tags, empty for non-demographic rows.
    pub fn interests(&self) -> &[String] {
        match &self.detail {
            SegmentDetail::Demographic { interests, .. } => interests,
            _ => &[],
        }
    }

    pub fn localized_approach(&self) -> Option<&str> {
        match &self.detail {
            SegmentDetail::Country { localized_approach } => localized_approach.as_deref(),
            _ => None,
        }
    }
}

/// The three input tables for one reporting period.
///
/// Names are expected to be unique within each table; the analyzer does not
/// detect duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentTables {
    pub demographics: Vec<SegmentRecord>,
    pub countries: Vec<SegmentRecord>,
    pub education: Vec<SegmentRecord>,
}

/// Period-level metrics snapshot for the analyzed content, consumed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub views: u64,
    pub reach: u64,
    pub reactions: u64,
    pub comments: u64,
    pub shares: u64,
    pub engagement_rate: f64,
    pub overall_engagement_rate: f64,
    pub completion_rate: f64,
    pub click_through_rate: f64,
}

/// A named reel-vs-overall metric pair (radar chart input).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricComparison {
    pub name: String,
    pub reel: f64,
    pub overall: f64,
}

impl MetricComparison {
    pub fn new(name: impl Into<String>, reel: f64, overall: f64) -> Self {
        Self {
            name: name.into(),
            reel,
            overall,
        }
    }

    /// Reel value minus overall value; negative means the reel underperforms.
    pub fn delta(&self) -> f64 {
        self.reel - self.overall
    }
}

/// One weekly point of the views/engagement trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub views: u64,
    pub engagement: f64,
}
