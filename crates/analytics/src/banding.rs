//! Performance banding — coarse buckets of the differential used by the
//! presentation layer for row styling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// Differential above +3.
    StrongOver,
    /// Differential above +1.
    Over,
    /// Differential above zero.
    SlightOver,
    /// Differential above -1.
    SlightUnder,
    /// Everything below.
    Under,
}

impl PerformanceBand {
    /// Bucket a differential. Boundaries are exclusive on the upper branch,
    /// first match wins.
    pub fn for_difference(difference: f64) -> Self {
        if difference > 3.0 {
            PerformanceBand::StrongOver
        } else if difference > 1.0 {
            PerformanceBand::Over
        } else if difference > 0.0 {
            PerformanceBand::SlightOver
        } else if difference > -1.0 {
            PerformanceBand::SlightUnder
        } else {
            PerformanceBand::Under
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(
            PerformanceBand::for_difference(4.88),
            PerformanceBand::StrongOver
        );
        // Exactly 3.0 is not above 3.0.
        assert_eq!(PerformanceBand::for_difference(3.0), PerformanceBand::Over);
        assert_eq!(
            PerformanceBand::for_difference(2.55),
            PerformanceBand::Over
        );
        assert_eq!(
            PerformanceBand::for_difference(0.09),
            PerformanceBand::SlightOver
        );
        assert_eq!(
            PerformanceBand::for_difference(0.0),
            PerformanceBand::SlightUnder
        );
        assert_eq!(
            PerformanceBand::for_difference(-0.54),
            PerformanceBand::SlightUnder
        );
        assert_eq!(
            PerformanceBand::for_difference(-1.0),
            PerformanceBand::Under
        );
        assert_eq!(
            PerformanceBand::for_difference(-12.97),
            PerformanceBand::Under
        );
    }
}
