//! Collision detection over bounding rectangles
//!
//! `CollisionChecker` is the single overlap authority: the placement
//! planner, the local optimizer, and the drag commit pass all validate
//! candidates through it. The excluded region is only enforced where a
//! layout is being generated; manual drag commits check bounds and
//! pairwise overlap only.

use crate::config::LayoutConfig;
use cloud_model::{BoundingBox, CanvasSpec};

/// Collision queries against the canvas and a set of placed boxes
pub struct CollisionChecker<'a> {
    canvas: &'a CanvasSpec,
    config: &'a LayoutConfig,
    placed: &'a [BoundingBox],
}

impl<'a> CollisionChecker<'a> {
    /// Create a checker over the given placed boxes
    pub fn new(canvas: &'a CanvasSpec, config: &'a LayoutConfig, placed: &'a [BoundingBox]) -> Self {
        Self { canvas, config, placed }
    }

    /// Whether the candidate box extends outside the canvas bounds
    /// (allowing the small tolerance margin past each edge)
    pub fn out_of_bounds(&self, candidate: &BoundingBox) -> bool {
        let bounds = self.canvas.bounds_with_margin(self.config.bounds_margin);
        candidate.min_x < bounds.min_x
            || candidate.max_x > bounds.max_x
            || candidate.min_y < bounds.min_y
            || candidate.max_y > bounds.max_y
    }

    /// Whether the candidate box intersects the fixed UI-control overlay
    pub fn hits_excluded_region(&self, candidate: &BoundingBox) -> bool {
        candidate.intersects(&self.canvas.excluded_region())
    }

    /// Whether the candidate box overlaps any placed box, excluding the
    /// item at `exclude` (the item being moved) when given
    pub fn overlaps_any(&self, candidate: &BoundingBox, exclude: Option<usize>) -> bool {
        self.placed.iter().enumerate().any(|(i, placed)| {
            exclude != Some(i) && candidate.intersects(placed)
        })
    }

    /// Combined test: out of bounds, excluded-region hit (when
    /// `enforce_exclusion` is set), or pairwise overlap.
    pub fn is_colliding(
        &self,
        candidate: &BoundingBox,
        exclude: Option<usize>,
        enforce_exclusion: bool,
    ) -> bool {
        if self.out_of_bounds(candidate) {
            return true;
        }
        if enforce_exclusion && self.hits_excluded_region(candidate) {
            return true;
        }
        self.overlaps_any(candidate, exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_fixture(placed: &[BoundingBox]) -> (CanvasSpec, LayoutConfig, Vec<BoundingBox>) {
        (CanvasSpec::new(800.0, 600.0), LayoutConfig::default(), placed.to_vec())
    }

    #[test]
    fn test_in_bounds_box_passes() {
        let (canvas, config, placed) = checker_fixture(&[]);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        let bbox = BoundingBox::new(100.0, 200.0, 100.0, 200.0);
        assert!(!checker.out_of_bounds(&bbox));
    }

    #[test]
    fn test_box_past_edge_is_out_of_bounds() {
        let (canvas, config, placed) = checker_fixture(&[]);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        assert!(checker.out_of_bounds(&BoundingBox::new(-10.0, 50.0, 100.0, 200.0)));
        assert!(checker.out_of_bounds(&BoundingBox::new(700.0, 803.0, 100.0, 200.0)));
        assert!(checker.out_of_bounds(&BoundingBox::new(100.0, 200.0, 500.0, 603.0)));
    }

    #[test]
    fn test_margin_tolerance() {
        let (canvas, config, placed) = checker_fixture(&[]);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        // Within the 2-unit margin on each side.
        assert!(!checker.out_of_bounds(&BoundingBox::new(-1.5, 801.5, -1.5, 601.5)));
    }

    #[test]
    fn test_excluded_region_hit() {
        let (canvas, config, placed) = checker_fixture(&[]);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        // Top-right control strip is 400..800 x 12..70.
        assert!(checker.hits_excluded_region(&BoundingBox::new(500.0, 600.0, 20.0, 60.0)));
        assert!(!checker.hits_excluded_region(&BoundingBox::new(100.0, 300.0, 20.0, 60.0)));
        assert!(!checker.hits_excluded_region(&BoundingBox::new(500.0, 600.0, 100.0, 200.0)));
    }

    #[test]
    fn test_pairwise_overlap() {
        let placed = [BoundingBox::new(100.0, 200.0, 100.0, 200.0)];
        let (canvas, config, placed) = checker_fixture(&placed);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        assert!(checker.overlaps_any(&BoundingBox::new(150.0, 250.0, 150.0, 250.0), None));
        assert!(!checker.overlaps_any(&BoundingBox::new(300.0, 400.0, 300.0, 400.0), None));
    }

    #[test]
    fn test_exclude_index_skips_self() {
        let placed = [BoundingBox::new(100.0, 200.0, 100.0, 200.0)];
        let (canvas, config, placed) = checker_fixture(&placed);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        let candidate = BoundingBox::new(110.0, 210.0, 110.0, 210.0);
        assert!(checker.overlaps_any(&candidate, None));
        assert!(!checker.overlaps_any(&candidate, Some(0)));
    }

    #[test]
    fn test_is_colliding_respects_exclusion_flag() {
        let (canvas, config, placed) = checker_fixture(&[]);
        let checker = CollisionChecker::new(&canvas, &config, &placed);
        let in_strip = BoundingBox::new(500.0, 600.0, 20.0, 60.0);
        assert!(checker.is_colliding(&in_strip, None, true));
        assert!(!checker.is_colliding(&in_strip, None, false));
    }
}
