//! Geometry primitives for word-cloud layout
//!
//! All coordinates are in canvas units with the origin at the top-left,
//! y growing downward (the convention of the host drawing surface).

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point translated by (dx, dy)
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned bounding box in min/max form
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a bounding box from its extents
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Width of the box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether this box overlaps another.
    ///
    /// Uses strict inequalities: boxes that merely touch along an edge do
    /// not count as overlapping.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Whether the given point lies inside the box (edges inclusive)
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Return this box grown by `padding` on every side
    pub fn expanded(&self, padding: f64) -> Self {
        Self {
            min_x: self.min_x - padding,
            max_x: self.max_x + padding,
            min_y: self.min_y - padding,
            max_y: self.max_y + padding,
        }
    }

    /// Return this box translated by (dx, dy)
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            max_x: self.max_x + dx,
            min_y: self.min_y + dy,
            max_y: self.max_y + dy,
        }
    }
}

/// One of the four rotations a word may take, in degrees clockwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// The full rotation cycle, in cycling order
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Rotation angle in degrees
    pub fn degrees(&self) -> f64 {
        match self {
            Rotation::R0 => 0.0,
            Rotation::R90 => 90.0,
            Rotation::R180 => 180.0,
            Rotation::R270 => 270.0,
        }
    }

    /// Rotation angle in radians
    pub fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }

    /// The next rotation in the cycle (90 degrees clockwise)
    pub fn clockwise(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// The previous rotation in the cycle (90 degrees counter-clockwise)
    pub fn counter_clockwise(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R90 => Rotation::R0,
            Rotation::R180 => Rotation::R90,
            Rotation::R270 => Rotation::R180,
        }
    }
}
