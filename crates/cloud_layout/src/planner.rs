//! Initial placement planning
//!
//! Words are processed in priority order (pinned words first, so they claim
//! favorable grid cells) and placed via three escalating strategies, each
//! validated through the collision detector:
//!
//! 1. Grid scan: the canvas is partitioned into roughly `1.5 x word_count`
//!    cells; each cell is tried with all four rotations and a small random
//!    jitter around its center.
//! 2. Random retry: uniformly random anchors within a fixed inset, random
//!    rotation, up to a bounded attempt budget.
//! 3. Forced acceptance: one final random candidate accepted regardless of
//!    collisions. Every word is always placed; residual overlap is a
//!    documented degraded outcome, not an error.

use crate::bbox::text_bounding_box;
use crate::collision::CollisionChecker;
use crate::config::LayoutConfig;
use cloud_model::{
    BoundingBox, CanvasSpec, Color, FontRange, Point, Rotation, SizeTier, TextMeasurer, WordItem,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Input to one placement pass
#[derive(Debug)]
pub struct PlacementRequest<'a> {
    /// Words to place, in caller order
    pub words: &'a [String],
    /// Words that always receive the `Huge` tier and are placed first
    pub pinned: &'a [String],
    /// Per-word color overrides
    pub colors: &'a HashMap<String, Color>,
    pub canvas: CanvasSpec,
    pub fonts: FontRange,
}

/// Plans non-overlapping anchor points and rotations for a word list
pub struct PlacementPlanner {
    config: LayoutConfig,
    rng: StdRng,
}

impl PlacementPlanner {
    /// Create a planner with a randomly seeded RNG
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, rng: StdRng::from_entropy() }
    }

    /// Create a planner with a fixed seed, for reproducible layouts
    pub fn with_seed(config: LayoutConfig, seed: u64) -> Self {
        Self { config, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place every requested word. The returned list is in priority order:
    /// pinned words first, then the remaining words in caller order.
    pub fn plan(&mut self, request: &PlacementRequest, measurer: &dyn TextMeasurer) -> Vec<WordItem> {
        // Pinned-first stable ordering: pinned words claim the best grid
        // cells before generic words compete for space.
        let (pinned, generic): (Vec<&String>, Vec<&String>) = request
            .words
            .iter()
            .partition(|word| request.pinned.contains(word));
        let pinned_count = pinned.len();
        let ordered: Vec<&String> = pinned.into_iter().chain(generic).collect();

        let word_count = ordered.len();
        let grid_cols = (((word_count as f64 * self.config.grid_fill_factor).sqrt()).ceil() as usize).max(1);
        let grid_rows = (((word_count as f64) / grid_cols as f64).ceil() as usize).max(1);
        let cell_width = request.canvas.width / (grid_cols + 1) as f64;
        let cell_height = request.canvas.height / (grid_rows + 1) as f64;

        let mut items: Vec<WordItem> = Vec::with_capacity(word_count);
        let mut placed_boxes: Vec<BoundingBox> = Vec::with_capacity(word_count);

        for (index, word) in ordered.into_iter().enumerate() {
            let tier = if index < pinned_count {
                SizeTier::Huge
            } else {
                SizeTier::GENERIC_CYCLE[(index - pinned_count) % SizeTier::GENERIC_CYCLE.len()]
            };
            let font_size = tier.font_size(&request.fonts);
            let color = request
                .colors
                .get(word)
                .copied()
                .unwrap_or_else(|| tier.default_color());
            let text_width = measurer.text_width(word, font_size);

            let (anchor, rotation, bbox, forced) = self.place_one(
                word,
                text_width,
                font_size,
                &request.canvas,
                grid_cols,
                grid_rows,
                cell_width,
                cell_height,
                &placed_boxes,
            );

            let mut item = WordItem::new(word.clone(), tier, font_size, anchor, rotation, color);
            item.forced = forced;
            placed_boxes.push(bbox);
            items.push(item);
        }

        items
    }

    /// Find an anchor and rotation for one word. Returns the accepted
    /// candidate and whether it came from the forced-acceptance branch.
    #[allow(clippy::too_many_arguments)]
    fn place_one(
        &mut self,
        word: &str,
        text_width: f64,
        font_size: f64,
        canvas: &CanvasSpec,
        grid_cols: usize,
        grid_rows: usize,
        cell_width: f64,
        cell_height: f64,
        placed_boxes: &[BoundingBox],
    ) -> (Point, Rotation, BoundingBox, bool) {
        // Phase 1: grid scan, four rotations per cell.
        let grid_attempts = grid_cols * grid_rows * 4;
        for attempt in 0..grid_attempts {
            let cell = attempt / 4;
            let col = cell % grid_cols;
            let row = cell / grid_cols;
            let rotation = Rotation::ALL[attempt % 4];

            let jitter_x = cell_width * self.config.grid_jitter_ratio;
            let jitter_y = cell_height * self.config.grid_jitter_ratio;
            let anchor = Point::new(
                cell_width * (col + 1) as f64 + self.rng.gen_range(-jitter_x..=jitter_x),
                cell_height * (row + 1) as f64 + self.rng.gen_range(-jitter_y..=jitter_y),
            );

            let bbox = text_bounding_box(anchor, text_width, font_size, rotation, &self.config);
            let checker = CollisionChecker::new(canvas, &self.config, placed_boxes);
            if !checker.is_colliding(&bbox, None, true) {
                return (anchor, rotation, bbox, false);
            }
        }

        // Phase 2: random retry within a fixed inset.
        trace!(word, "grid scan exhausted, entering random retry");
        for _ in 0..self.config.retry_attempts {
            let anchor = self.random_anchor(canvas);
            let rotation = self.random_rotation();
            let bbox = text_bounding_box(anchor, text_width, font_size, rotation, &self.config);
            let checker = CollisionChecker::new(canvas, &self.config, placed_boxes);
            if !checker.is_colliding(&bbox, None, true) {
                return (anchor, rotation, bbox, false);
            }
        }

        // Phase 3: forced acceptance. Guarantees termination; the item may
        // overlap its neighbors.
        debug!(word, "placement fell through to forced acceptance");
        let anchor = self.random_anchor(canvas);
        let rotation = self.random_rotation();
        let bbox = text_bounding_box(anchor, text_width, font_size, rotation, &self.config);
        (anchor, rotation, bbox, true)
    }

    /// Random anchor within the retry inset. Falls back to the full extent
    /// when the canvas is too small for the inset on both sides.
    fn random_anchor(&mut self, canvas: &CanvasSpec) -> Point {
        let x = self.random_coord(canvas.width);
        let y = self.random_coord(canvas.height);
        Point::new(x, y)
    }

    fn random_coord(&mut self, extent: f64) -> f64 {
        let inset = self.config.retry_inset;
        if extent > inset * 2.0 {
            self.rng.gen_range(inset..extent - inset)
        } else {
            self.rng.gen_range(0.0..extent)
        }
    }

    fn random_rotation(&mut self) -> Rotation {
        Rotation::ALL[self.rng.gen_range(0..Rotation::ALL.len())]
    }
}
