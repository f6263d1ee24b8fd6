//! Cloud Model - Core data model for the typograph word-cloud engine
//!
//! This crate provides the foundational types shared by the placement
//! pipeline and the interaction controller:
//! - Geometry primitives (points, axis-aligned bounding boxes, the fixed
//!   rotation set)
//! - Word items with size tiers, font weights, and colors
//! - The canvas specification, including the excluded UI control strip
//! - The `TextMeasurer` capability trait for injectable text metrics

mod canvas;
mod color;
mod error;
mod geometry;
mod metrics;
mod word;

pub use canvas::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use metrics::*;
pub use word::*;
