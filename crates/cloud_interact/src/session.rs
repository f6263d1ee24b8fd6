//! The mutable layout session
//!
//! A `LayoutSession` is created per layout generation and owns its word
//! items exclusively; hosts read snapshots and route every mutation
//! through the engine's interaction operations. Regenerating a layout
//! discards the session entirely.

use cloud_model::{Point, WordItem};
use serde::{Deserialize, Serialize};

/// An in-flight drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Index of the item being dragged
    pub index: usize,
    /// Pointer position minus item anchor at gesture start
    pub offset: Point,
    /// Anchor at gesture start, restored when the drop is rejected
    pub origin: Point,
}

/// The set of all placed word items for one layout generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSession {
    pub(crate) items: Vec<WordItem>,
    pub(crate) selected: Option<usize>,
    pub(crate) drag: Option<DragGesture>,
}

impl LayoutSession {
    /// Create a session from freshly placed items
    pub fn new(items: Vec<WordItem>) -> Self {
        Self { items, selected: None, drag: None }
    }

    /// All placed items, in render order
    pub fn items(&self) -> &[WordItem] {
        &self.items
    }

    /// Item at the given index
    pub fn item(&self, index: usize) -> Option<&WordItem> {
        self.items.get(index)
    }

    /// Number of placed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the currently selected item, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected item, if any
    pub fn selected_item(&self) -> Option<&WordItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Number of items that were placed on the forced-acceptance branch
    /// and may overlap their neighbors
    pub fn forced_count(&self) -> usize {
        self.items.iter().filter(|item| item.forced).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_model::{Color, Rotation, SizeTier};

    fn sample_item(text: &str) -> WordItem {
        WordItem::new(
            text,
            SizeTier::Medium,
            60.0,
            Point::new(100.0, 100.0),
            Rotation::R0,
            Color::BLACK,
        )
    }

    #[test]
    fn test_new_session_has_no_selection() {
        let session = LayoutSession::new(vec![sample_item("a"), sample_item("b")]);
        assert_eq!(session.len(), 2);
        assert_eq!(session.selected(), None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_forced_count() {
        let mut forced = sample_item("forced");
        forced.forced = true;
        let session = LayoutSession::new(vec![sample_item("a"), forced]);
        assert_eq!(session.forced_count(), 1);
    }

    #[test]
    fn test_session_serializes() {
        let session = LayoutSession::new(vec![sample_item("a")]);
        let json = serde_json::to_string(&session).unwrap();
        let back: LayoutSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.item(0).unwrap().text, "a");
    }
}
