//! Local placement optimization
//!
//! A greedy, non-backtracking post-pass: each pass walks all placed items
//! and moves an item by the first of eight fixed offsets whose destination
//! stays in bounds, avoids the control strip, and collides with nothing.
//! This reduces residual overlap left by forced acceptance but does not
//! guarantee elimination.

use crate::bbox::word_bounding_box;
use crate::collision::CollisionChecker;
use crate::config::LayoutConfig;
use cloud_model::{BoundingBox, CanvasSpec, TextMeasurer, WordItem};
use tracing::trace;

/// The eight candidate nudges: four axis directions and four diagonals
pub const NUDGE_OFFSETS: [(f64, f64); 8] = [
    (0.0, -10.0),
    (0.0, 10.0),
    (-10.0, 0.0),
    (10.0, 0.0),
    (-7.0, -7.0),
    (7.0, -7.0),
    (-7.0, 7.0),
    (7.0, 7.0),
];

/// Run the configured number of nudge passes over all placed items.
pub fn optimize(
    items: &mut [WordItem],
    canvas: &CanvasSpec,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) {
    let mut boxes: Vec<BoundingBox> = items
        .iter()
        .map(|item| word_bounding_box(item, measurer, config))
        .collect();

    for pass in 0..config.optimizer_passes {
        let mut moved = 0usize;
        for index in 0..items.len() {
            for (dx, dy) in NUDGE_OFFSETS {
                let candidate = boxes[index].translated(dx, dy);
                let checker = CollisionChecker::new(canvas, config, &boxes);
                if !checker.is_colliding(&candidate, Some(index), true) {
                    items[index].anchor = items[index].anchor.translated(dx, dy);
                    boxes[index] = candidate;
                    moved += 1;
                    break;
                }
            }
        }
        trace!(pass, moved, "optimizer pass complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_model::{Color, HeuristicMeasurer, Point, Rotation, SizeTier};

    fn item_at(text: &str, x: f64, y: f64) -> WordItem {
        WordItem::new(
            text,
            SizeTier::Small,
            24.0,
            Point::new(x, y),
            Rotation::R0,
            Color::BLACK,
        )
    }

    fn overlaps(items: &[WordItem]) -> bool {
        let config = LayoutConfig::default();
        let measurer = HeuristicMeasurer::default();
        let boxes: Vec<BoundingBox> = items
            .iter()
            .map(|item| word_bounding_box(item, &measurer, &config))
            .collect();
        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if boxes[i].intersects(&boxes[j]) {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_resolves_small_overlap() {
        // Boxes overlap by less than one nudge step along x.
        let mut items = vec![item_at("ab", 200.0, 200.0), item_at("cd", 230.0, 200.0)];
        assert!(overlaps(&items));

        optimize(
            &mut items,
            &CanvasSpec::new(800.0, 600.0),
            &LayoutConfig::default(),
            &HeuristicMeasurer::default(),
        );
        assert!(!overlaps(&items));
    }

    #[test]
    fn test_never_introduces_overlap() {
        let mut items = vec![
            item_at("north", 150.0, 150.0),
            item_at("south", 150.0, 450.0),
            item_at("west", 500.0, 300.0),
        ];
        assert!(!overlaps(&items));

        optimize(
            &mut items,
            &CanvasSpec::new(800.0, 600.0),
            &LayoutConfig::default(),
            &HeuristicMeasurer::default(),
        );
        assert!(!overlaps(&items));
    }

    #[test]
    fn test_never_nudges_into_control_strip() {
        // Just below the control strip (400..800 x 12..70): the upward
        // nudge would land inside it and must be rejected.
        let mut items = vec![item_at("pinned", 500.0, 95.0)];
        let canvas = CanvasSpec::new(800.0, 600.0);
        let config = LayoutConfig::default();
        let measurer = HeuristicMeasurer::default();

        optimize(&mut items, &canvas, &config, &measurer);

        let bbox = word_bounding_box(&items[0], &measurer, &config);
        assert!(!bbox.intersects(&canvas.excluded_region()));
    }

    #[test]
    fn test_stuck_items_keep_their_anchor() {
        // Heavy mutual overlap that no single nudge can clear: the
        // optimizer leaves the items where they are.
        let mut items = vec![item_at("stuck", 200.0, 200.0), item_at("tight", 202.0, 200.0)];
        let before: Vec<Point> = items.iter().map(|item| item.anchor).collect();

        optimize(
            &mut items,
            &CanvasSpec::new(800.0, 600.0),
            &LayoutConfig::default(),
            &HeuristicMeasurer::default(),
        );

        assert_eq!(items[0].anchor, before[0]);
        assert_eq!(items[1].anchor, before[1]);
    }
}
