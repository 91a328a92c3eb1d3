//! Conversion strategies — authored action plans keyed by segment name,
//! plus the selection toggle driving the strategy detail panel.

pub mod index;
pub mod selection;

pub use index::{SegmentType, StrategyIndex, StrategyRecord};
pub use selection::toggle_selection;
