//! Injectable text metrics
//!
//! The placement pipeline only needs rendered text widths; ascent and
//! descent are approximated from the font size (see the bounding-box
//! calculator). Injecting the width measurement keeps placement logic
//! testable without a real font-rendering backend.

/// Capability trait for measuring rendered text width
pub trait TextMeasurer {
    /// Width of `text` rendered at `font_size`, in canvas units
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Width heuristic used when no real text backend is attached: average
/// character advance is taken as a fixed fraction of the em size.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMeasurer {
    /// Average character advance as a fraction of the font size
    pub advance_ratio: f64,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.advance_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_width_scales_with_length() {
        let measurer = HeuristicMeasurer::default();
        let short = measurer.text_width("ab", 10.0);
        let long = measurer.text_width("abcd", 10.0);
        assert_eq!(short, 12.0);
        assert_eq!(long, 24.0);
    }

    #[test]
    fn test_heuristic_width_counts_chars_not_bytes() {
        let measurer = HeuristicMeasurer::default();
        assert_eq!(measurer.text_width("日本語", 10.0), 18.0);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let measurer = HeuristicMeasurer::default();
        assert_eq!(measurer.text_width("", 48.0), 0.0);
    }
}
