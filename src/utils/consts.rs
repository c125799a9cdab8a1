/// Binary input preloaded in the interactive session.
pub const DEFAULT_BIT_STRING: &str = "10110";

/// Log level (overridable via RUST_LOG).
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Chart geometry
// ============================================================================

/// Cells between two category ticks of the chart.
pub const COLUMN_WIDTH: usize = 6;

/// Blank lines between two scheme lanes.
pub const LANE_GAP: usize = 1;

/// Left gutter in front of every chart row, wide enough for the level
/// labels +1 / 0 / -1.
pub const GUTTER_WIDTH: usize = 3;
