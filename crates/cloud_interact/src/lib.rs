//! Cloud Interact - Layout session and interaction controller
//!
//! This crate owns the mutable state of one word-cloud generation:
//! - `LayoutSession` holds the placed items, the current selection, and
//!   the in-flight drag gesture
//! - `WordCloudEngine` is the facade the host drives: layout generation,
//!   pointer-based selection and dragging, keyboard rotation and resizing,
//!   and pull-based render snapshots

mod engine;
mod render;
mod session;

pub use engine::*;
pub use render::*;
pub use session::*;
