//! Canvas specification: layout universe bounds and the excluded region

use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// Width of the control strip overlay anchored to the top-right corner
pub const CONTROL_STRIP_WIDTH: f64 = 400.0;
/// Top edge of the control strip overlay
pub const CONTROL_STRIP_TOP: f64 = 12.0;
/// Bottom edge of the control strip overlay (button height plus spacing)
pub const CONTROL_STRIP_BOTTOM: f64 = 70.0;
/// How far a bounding box may extend past the canvas edge
pub const BOUNDS_MARGIN: f64 = 2.0;

/// The layout universe: canvas dimensions plus the fixed excluded region
/// hosting UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
}

impl CanvasSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The fixed UI-control overlay in the top-right corner. Initial
    /// placement treats this as occupied space; manual dragging does not.
    pub fn excluded_region(&self) -> BoundingBox {
        BoundingBox::new(
            self.width - CONTROL_STRIP_WIDTH,
            self.width,
            CONTROL_STRIP_TOP,
            CONTROL_STRIP_BOTTOM,
        )
    }

    /// The bounds rectangle a word's box must stay within, including the
    /// small tolerance margin past each edge.
    pub fn bounds_with_margin(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(-margin, self.width + margin, -margin, self.height + margin)
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}
