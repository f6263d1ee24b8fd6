//! Layout configuration
//!
//! Every empirically tuned constant of the placement pipeline lives here as
//! a named, overridable field. The ascent/descent ratios and the box
//! padding were tuned against the host's text rendering and changing them
//! changes observable placement outcomes, so the defaults are preserved
//! verbatim rather than derived from real font metrics.

use serde::{Deserialize, Serialize};

/// Tunable constants for placement, optimization, and interaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Portion of the font size above the baseline
    pub ascent_ratio: f64,
    /// Portion of the font size below the baseline
    pub descent_ratio: f64,
    /// Breathing room added on every side of a glyph box
    pub box_padding: f64,
    /// How far a box may extend past the canvas edge before it counts as
    /// out of bounds
    pub bounds_margin: f64,
    /// Grid cell budget relative to the word count (cols x rows is about
    /// this factor times the number of words)
    pub grid_fill_factor: f64,
    /// Random jitter around a grid cell center, as a fraction of cell size
    pub grid_jitter_ratio: f64,
    /// Attempt budget for the random-retry phase
    pub retry_attempts: u32,
    /// Inset from the canvas edges for random-retry anchors
    pub retry_inset: f64,
    /// Number of optimizer passes over all placed items
    pub optimizer_passes: u32,
    /// Inset the anchor is clamped to while a drag is in progress
    pub drag_clamp_inset: f64,
    /// Margin used by the drop correction pass to pull a box back inside
    /// the canvas
    pub drop_margin: f64,
    /// Interactive resize step as a fraction of the current font size
    pub resize_step_ratio: f64,
    /// Smallest interactive resize step
    pub min_resize_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ascent_ratio: 0.75,
            descent_ratio: 0.15,
            box_padding: 5.0,
            bounds_margin: 2.0,
            grid_fill_factor: 1.5,
            grid_jitter_ratio: 0.25,
            retry_attempts: 1000,
            retry_inset: 80.0,
            optimizer_passes: 5,
            drag_clamp_inset: 10.0,
            drop_margin: 10.0,
            resize_step_ratio: 0.1,
            min_resize_step: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metric_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.ascent_ratio, 0.75);
        assert_eq!(config.descent_ratio, 0.15);
        assert_eq!(config.box_padding, 5.0);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = LayoutConfig { optimizer_passes: 3, ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
