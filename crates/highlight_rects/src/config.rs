//! Tolerances used when collapsing selection fragments.
//!
//! Configuration is constructed programmatically; there is no environment or
//! file-based source.

/// Default maximum difference in `top` and in `height` for two rects to share a line.
pub const DEFAULT_LINE_TOLERANCE: f64 = 5.0;
/// Default maximum horizontal gap bridged between two rects on one line.
pub const DEFAULT_GAP_TOLERANCE: f64 = 10.0;

/// Tolerances for the rectangle optimizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimizerConfig {
    /// Two rects are on the same line when both their `top` and `height`
    /// differ by strictly less than this.
    pub line_tolerance: f64,
    /// Same-line rects whose horizontal gap is at most this are merged.
    pub gap_tolerance: f64,
}

impl OptimizerConfig {
    /// Construct a new `OptimizerConfig` with explicit tolerances.
    ///
    /// # Arguments
    ///
    /// * `line_tolerance` - Same-line threshold in pixels (negative values clamp to 0)
    /// * `gap_tolerance` - Horizontal gap threshold in pixels (negative values clamp to 0)
    ///
    /// # Returns
    ///
    /// A new `OptimizerConfig` instance with the specified tolerances
    #[inline]
    #[must_use]
    pub fn new(line_tolerance: f64, gap_tolerance: f64) -> Self {
        Self {
            line_tolerance: line_tolerance.max(0.0),
            gap_tolerance: gap_tolerance.max(0.0),
        }
    }

    /// Only merge rects that overlap or touch exactly, still allowing the
    /// default line tolerance.
    #[inline]
    #[must_use]
    pub fn strict() -> Self {
        Self::new(DEFAULT_LINE_TOLERANCE, 0.0)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_TOLERANCE, DEFAULT_GAP_TOLERANCE)
    }
}
