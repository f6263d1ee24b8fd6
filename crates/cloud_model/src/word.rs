//! Word items and their discrete size tiers

use crate::color::Color;
use crate::geometry::{Point, Rotation};
use serde::{Deserialize, Serialize};

/// Font range limits for a layout, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontRange {
    /// Smallest tier font size
    pub min: f64,
    /// Largest tier font size
    pub max: f64,
}

impl FontRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound for interactive resizing (half the smallest tier)
    pub fn resize_floor(&self) -> f64 {
        self.min * 0.5
    }

    /// Upper bound for interactive resizing (1.5x the largest tier)
    pub fn resize_ceiling(&self) -> f64 {
        self.max * 1.5
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self { min: 24.0, max: 120.0 }
    }
}

/// One of the four discrete size classes assigned to a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    /// Maximum size, reserved for pinned words
    Huge,
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// The cycle assigned to non-pinned words, in order
    pub const GENERIC_CYCLE: [SizeTier; 3] = [SizeTier::Large, SizeTier::Medium, SizeTier::Small];

    /// Font size for this tier within the given range
    pub fn font_size(&self, range: &FontRange) -> f64 {
        match self {
            SizeTier::Huge => range.max,
            SizeTier::Large => range.max * 0.7,
            SizeTier::Medium => range.max * 0.5,
            SizeTier::Small => range.min,
        }
    }

    /// Font weight paired with this tier
    pub fn font_weight(&self) -> FontWeight {
        match self {
            SizeTier::Huge => FontWeight::Bold,
            SizeTier::Large => FontWeight::SemiBold,
            SizeTier::Medium => FontWeight::Medium,
            SizeTier::Small => FontWeight::Regular,
        }
    }

    /// Default color for words of this tier when no override is supplied
    pub fn default_color(&self) -> Color {
        match self {
            SizeTier::Huge => Color::rgb(0xdc, 0x35, 0x45),
            SizeTier::Large => Color::rgb(0x1a, 0x1a, 0x1a),
            SizeTier::Medium => Color::rgb(0x4a, 0x4a, 0x4a),
            SizeTier::Small => Color::rgb(0x80, 0x80, 0x80),
        }
    }
}

/// Font weight classes used by the drawing backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight value
    pub fn css_value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// One placed label in a layout session.
///
/// The anchor is the text's left-edge baseline reference point, not its
/// geometric center. `text` is immutable for the lifetime of a layout
/// generation; position, rotation, and font size are mutated in place by
/// the interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordItem {
    pub text: String,
    pub size_tier: SizeTier,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub anchor: Point,
    pub rotation: Rotation,
    pub color: Color,
    /// True when the item was placed on the forced-acceptance branch and
    /// may therefore overlap its neighbors
    pub forced: bool,
}

impl WordItem {
    /// Create a word item for the given tier at the given anchor
    pub fn new(
        text: impl Into<String>,
        size_tier: SizeTier,
        font_size: f64,
        anchor: Point,
        rotation: Rotation,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            size_tier,
            font_size,
            font_weight: size_tier.font_weight(),
            anchor,
            rotation,
            color,
            forced: false,
        }
    }
}
