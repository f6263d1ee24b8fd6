//! Render snapshot rows for the host drawing backend

use cloud_model::WordItem;
use serde::{Deserialize, Serialize};

/// One row of the render list: everything a drawing backend needs to paint
/// a word, anchored at its left-edge baseline point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub text: String,
    /// Anchor x (left edge)
    pub x: f64,
    /// Anchor y (baseline)
    pub y: f64,
    pub font_size: f64,
    /// Rotation around the anchor, degrees clockwise
    pub rotation: f64,
    /// Numeric CSS font weight
    pub font_weight: u16,
    /// CSS color string
    pub color: String,
}

impl From<&WordItem> for RenderItem {
    fn from(item: &WordItem) -> Self {
        Self {
            text: item.text.clone(),
            x: item.anchor.x,
            y: item.anchor.y,
            font_size: item.font_size,
            rotation: item.rotation.degrees(),
            font_weight: item.font_weight.css_value(),
            color: item.color.to_css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_model::{Color, Point, Rotation, SizeTier};

    #[test]
    fn test_render_item_from_word_item() {
        let item = WordItem::new(
            "cloud",
            SizeTier::Huge,
            120.0,
            Point::new(40.0, 80.0),
            Rotation::R90,
            Color::rgb(0xdc, 0x35, 0x45),
        );
        let render = RenderItem::from(&item);

        assert_eq!(render.text, "cloud");
        assert_eq!(render.x, 40.0);
        assert_eq!(render.y, 80.0);
        assert_eq!(render.rotation, 90.0);
        assert_eq!(render.font_weight, 700);
        assert_eq!(render.color, "#dc3545");
    }

    #[test]
    fn test_render_item_serializes() {
        let item = WordItem::new(
            "x",
            SizeTier::Small,
            24.0,
            Point::new(0.0, 0.0),
            Rotation::R0,
            Color::BLACK,
        );
        let json = serde_json::to_value(RenderItem::from(&item)).unwrap();
        assert_eq!(json["font_weight"], 400);
        assert_eq!(json["color"], "#000000");
    }
}
