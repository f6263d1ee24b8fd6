//! Color representation and the default palette

use crate::error::{CloudError, CloudResult};
use serde::{Deserialize, Serialize};

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (fully opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create a color from a hex string (e.g., "#dc3545" or "dc3545")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Self::rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Self::rgba(r, g, b, a))
        } else {
            None
        }
    }

    /// Parse a hex color string, reporting the offending input on failure.
    ///
    /// The checked entry point for host-supplied color overrides;
    /// `from_hex` is the lenient form for internal use.
    pub fn parse(hex: &str) -> CloudResult<Self> {
        Self::from_hex(hex).ok_or_else(|| CloudError::InvalidColor(hex.to_string()))
    }

    /// Convert to a lowercase hex string with # prefix
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to a CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!(
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// The default color palette offered to users for per-word colors
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(0x00, 0x00, 0x00), // black
    Color::rgb(0xdc, 0x35, 0x45), // red
    Color::rgb(0x1a, 0x1a, 0x1a), // dark gray
    Color::rgb(0x4a, 0x4a, 0x4a), // mid gray
    Color::rgb(0x80, 0x80, 0x80), // light gray
    Color::rgb(0x00, 0x66, 0xcc), // blue
    Color::rgb(0x28, 0xa7, 0x45), // green
    Color::rgb(0xff, 0xc1, 0x07), // yellow
    Color::rgb(0x17, 0xa2, 0xb8), // cyan
    Color::rgb(0x6f, 0x42, 0xc1), // purple
];
