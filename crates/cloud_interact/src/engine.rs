//! The word-cloud engine facade
//!
//! `WordCloudEngine` owns the layout session and exposes every command the
//! host drives: layout generation and regeneration, word-list edits,
//! pointer selection and dragging with a checked commit, keyboard rotation
//! and resizing, and pull-based render snapshots.
//!
//! Interaction follows a lenient-during, strict-on-commit model: drag
//! proposals are unchecked (cheap, continuous feedback) and only the drop
//! is validated against the collision detector, reverting to the pre-drag
//! anchor when the corrected drop position still collides. Rotation has no
//! commit step and applies immediately.

use crate::render::RenderItem;
use crate::session::{DragGesture, LayoutSession};
use cloud_layout::{
    optimize, word_bounding_box, CollisionChecker, LayoutConfig, PlacementPlanner,
    PlacementRequest,
};
use cloud_model::{
    BoundingBox, CanvasSpec, CloudError, CloudResult, Color, FontRange, HeuristicMeasurer, Point,
    TextMeasurer,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Maximum number of words a layout may contain
pub const MAX_WORDS: usize = 20;

/// Direction for keyboard rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Direction for keyboard resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeDirection {
    Grow,
    Shrink,
}

/// Stateful facade over the placement pipeline and the layout session
pub struct WordCloudEngine {
    canvas: CanvasSpec,
    fonts: FontRange,
    config: LayoutConfig,
    measurer: Box<dyn TextMeasurer>,
    planner: PlacementPlanner,
    words: Vec<String>,
    pinned: Vec<String>,
    colors: HashMap<String, Color>,
    session: Option<LayoutSession>,
}

impl WordCloudEngine {
    /// Create an engine for the given canvas and font range, with the
    /// default configuration and the heuristic text measurer
    pub fn new(canvas: CanvasSpec, fonts: FontRange) -> Self {
        let config = LayoutConfig::default();
        Self {
            canvas,
            fonts,
            config,
            measurer: Box::new(HeuristicMeasurer::default()),
            planner: PlacementPlanner::new(config),
            words: Vec::new(),
            pinned: Vec::new(),
            colors: HashMap::new(),
            session: None,
        }
    }

    /// Override the layout configuration. Resets the planner, so apply
    /// this before `with_seed`.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self.planner = PlacementPlanner::new(config);
        self
    }

    /// Seed the planner RNG for reproducible layouts
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.planner = PlacementPlanner::with_seed(self.config, seed);
        self
    }

    /// Inject a text metrics provider
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Words that always receive the `Huge` tier and are placed first
    pub fn with_pinned(mut self, pinned: Vec<String>) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn canvas(&self) -> &CanvasSpec {
        &self.canvas
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The current layout session, if one has been generated
    pub fn session(&self) -> Option<&LayoutSession> {
        self.session.as_ref()
    }

    /// The stored word list used by the next (re)generation
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Generate a fresh layout for the given words, discarding any
    /// previous session. Blank words are dropped; the remaining list must
    /// be non-empty and at most `MAX_WORDS` long.
    pub fn generate_layout(
        &mut self,
        words: &[String],
        colors: Option<&HashMap<String, Color>>,
    ) -> CloudResult<()> {
        let cleaned = sanitize_words(words)?;
        self.words = cleaned;
        self.colors = colors.cloned().unwrap_or_default();
        self.place();
        Ok(())
    }

    /// Run a new placement pass over the stored word list
    pub fn regenerate_layout(&mut self) -> CloudResult<()> {
        if self.words.is_empty() {
            return Err(CloudError::NoSession);
        }
        self.place();
        Ok(())
    }

    /// Replace the stored word list and color map without a placement
    /// pass. The live session is left untouched; the new words and colors
    /// take effect on the next (re)generation.
    pub fn update_words(
        &mut self,
        words: &[String],
        colors: Option<&HashMap<String, Color>>,
    ) -> CloudResult<()> {
        let cleaned = sanitize_words(words)?;
        self.words = cleaned;
        self.colors = colors.cloned().unwrap_or_default();
        Ok(())
    }

    fn place(&mut self) {
        let request = PlacementRequest {
            words: &self.words,
            pinned: &self.pinned,
            colors: &self.colors,
            canvas: self.canvas,
            fonts: self.fonts,
        };
        let mut items = self.planner.plan(&request, self.measurer.as_ref());
        optimize(&mut items, &self.canvas, &self.config, self.measurer.as_ref());
        self.session = Some(LayoutSession::new(items));
    }

    /// Select the topmost item whose bounding box contains (x, y) and
    /// start a drag gesture for it. A miss ends any pending gesture but
    /// keeps the previous selection.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<usize> {
        let session = self.session.as_mut()?;
        for index in (0..session.items.len()).rev() {
            let bbox = word_bounding_box(&session.items[index], self.measurer.as_ref(), &self.config);
            if bbox.contains_point(x, y) {
                let anchor = session.items[index].anchor;
                session.selected = Some(index);
                session.drag = Some(DragGesture {
                    index,
                    offset: Point::new(x - anchor.x, y - anchor.y),
                    origin: anchor,
                });
                return Some(index);
            }
        }
        session.drag = None;
        None
    }

    /// Move the dragged item to follow the pointer. Unchecked apart from
    /// clamping the anchor to a small inset of the canvas; collision is
    /// deferred to `commit_drag`.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(gesture) = session.drag else {
            return false;
        };
        let inset = self.config.drag_clamp_inset;
        let anchor = Point::new(
            (x - gesture.offset.x).clamp(inset, self.canvas.width - inset),
            (y - gesture.offset.y).clamp(inset, self.canvas.height - inset),
        );
        session.items[gesture.index].anchor = anchor;
        true
    }

    /// End the drag gesture with a correction pass: the drop box is pulled
    /// back inside the canvas by the minimal amount, then validated against
    /// all other items. Returns true when the (possibly corrected) drop was
    /// committed, false when it was reverted or no drag was active.
    pub fn commit_drag(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(gesture) = session.drag.take() else {
            return false;
        };
        let index = gesture.index;
        let margin = self.config.drop_margin;
        let bbox = word_bounding_box(&session.items[index], self.measurer.as_ref(), &self.config);

        let mut dx = 0.0;
        if bbox.min_x < margin {
            dx = margin - bbox.min_x;
        } else if bbox.max_x > self.canvas.width - margin {
            dx = (self.canvas.width - margin) - bbox.max_x;
        }
        let mut dy = 0.0;
        if bbox.min_y < margin {
            dy = margin - bbox.min_y;
        } else if bbox.max_y > self.canvas.height - margin {
            dy = (self.canvas.height - margin) - bbox.max_y;
        }

        let adjusted = bbox.translated(dx, dy);
        let boxes: Vec<BoundingBox> = session
            .items
            .iter()
            .map(|item| word_bounding_box(item, self.measurer.as_ref(), &self.config))
            .collect();
        let checker = CollisionChecker::new(&self.canvas, &self.config, &boxes);

        // The excluded region binds initial placement only; a manual drop
        // is checked against canvas bounds and other items.
        if checker.is_colliding(&adjusted, Some(index), false) {
            debug!(index, "drop rejected, reverting to pre-drag anchor");
            session.items[index].anchor = gesture.origin;
            false
        } else {
            session.items[index].anchor = session.items[index].anchor.translated(dx, dy);
            true
        }
    }

    /// Cycle the selected item's rotation one step. Applied immediately;
    /// rotation is allowed to intersect neighbors.
    pub fn rotate_selected(&mut self, direction: RotationDirection) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(index) = session.selected else {
            return false;
        };
        let item = &mut session.items[index];
        item.rotation = match direction {
            RotationDirection::Clockwise => item.rotation.clockwise(),
            RotationDirection::CounterClockwise => item.rotation.counter_clockwise(),
        };
        true
    }

    /// Grow or shrink the selected item's font size by one step (10% of
    /// the current size, at least the minimum step), clamped to the
    /// resize window of the font range.
    pub fn resize_selected(&mut self, direction: ResizeDirection) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(index) = session.selected else {
            return false;
        };
        let item = &mut session.items[index];
        let step = (item.font_size * self.config.resize_step_ratio).max(self.config.min_resize_step);
        item.font_size = match direction {
            ResizeDirection::Grow => (item.font_size + step).min(self.fonts.resize_ceiling()),
            ResizeDirection::Shrink => (item.font_size - step).max(self.fonts.resize_floor()),
        };
        true
    }

    /// Pull-based render snapshot: the ordered list of rows a drawing
    /// backend needs to repaint the current session state.
    pub fn render_items(&self) -> Vec<RenderItem> {
        self.session
            .as_ref()
            .map(|session| session.items.iter().map(RenderItem::from).collect())
            .unwrap_or_default()
    }
}

/// Trim and drop blank words, then validate the list size
fn sanitize_words(words: &[String]) -> CloudResult<Vec<String>> {
    let cleaned: Vec<String> = words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();
    if cleaned.is_empty() {
        return Err(CloudError::EmptyWordList);
    }
    if cleaned.len() > MAX_WORDS {
        return Err(CloudError::TooManyWords { count: cleaned.len(), max: MAX_WORDS });
    }
    Ok(cleaned)
}
