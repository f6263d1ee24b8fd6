//! Cloud Layout - Placement pipeline for the typograph word-cloud engine
//!
//! This crate turns a word list into a set of placed `WordItem`s:
//! - `LayoutConfig` holds every tuned constant as an overridable field
//! - The bounding-box calculator maps an anchored, rotated text item to an
//!   axis-aligned rectangle
//! - The collision detector is the single overlap authority used by every
//!   other component
//! - The placement planner searches grid-scan, random-retry, and
//!   forced-acceptance strategies in turn
//! - The local optimizer nudges placed items to reduce residual overlap

mod bbox;
mod collision;
mod config;
mod optimizer;
mod planner;

pub use bbox::*;
pub use collision::*;
pub use config::*;
pub use optimizer::*;
pub use planner::*;
