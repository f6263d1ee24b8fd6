//! Bounding box calculation for anchored, rotated text
//!
//! The anchor is the text's left-edge baseline point. The unrotated glyph
//! box spans from `-ascent` above the baseline to `descent` below it and
//! `width` to the right of the anchor; the box is rotated around the
//! anchor, min/maxed into an axis-aligned rectangle, and padded. The
//! result deliberately over-approximates the glyph footprint to leave
//! visual breathing room between words.

use crate::config::LayoutConfig;
use cloud_model::{BoundingBox, Point, Rotation, TextMeasurer, WordItem};

/// Compute the padded, axis-aligned bounding box of a text item.
///
/// `text_width` is the rendered width from the text metrics provider.
pub fn text_bounding_box(
    anchor: Point,
    text_width: f64,
    font_size: f64,
    rotation: Rotation,
    config: &LayoutConfig,
) -> BoundingBox {
    let ascent = font_size * config.ascent_ratio;
    let descent = font_size * config.descent_ratio;

    // Corners of the unrotated glyph box, relative to the anchor:
    // top-left, top-right, bottom-right, bottom-left.
    let corners = [
        (0.0, -ascent),
        (text_width, -ascent),
        (text_width, descent),
        (0.0, descent),
    ];

    let (sin, cos) = rotation.radians().sin_cos();

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (cx, cy) in corners {
        let rx = cx * cos - cy * sin;
        let ry = cx * sin + cy * cos;
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    BoundingBox::new(
        anchor.x + min_x,
        anchor.x + max_x,
        anchor.y + min_y,
        anchor.y + max_y,
    )
    .expanded(config.box_padding)
}

/// Bounding box of a placed word item, measuring its text width through
/// the injected metrics provider.
pub fn word_bounding_box(
    item: &WordItem,
    measurer: &dyn TextMeasurer,
    config: &LayoutConfig,
) -> BoundingBox {
    let width = measurer.text_width(&item.text, item.font_size);
    text_bounding_box(item.anchor, width, item.font_size, item.rotation, config)
}
