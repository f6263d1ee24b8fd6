//! Error types for the word-cloud engine

use thiserror::Error;

/// Errors that can occur when driving the word-cloud engine.
///
/// Placement itself never fails (forced acceptance guarantees every word is
/// placed) and interaction operations are accepted, clamped, or reverted;
/// errors are limited to invalid caller input.
#[derive(Error, Debug)]
pub enum CloudError {
    /// The supplied word list was empty
    #[error("word list is empty")]
    EmptyWordList,

    /// The supplied word list exceeds the supported maximum
    #[error("word list has {count} entries, maximum is {max}")]
    TooManyWords { count: usize, max: usize },

    /// A color string could not be parsed
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// No layout session exists yet
    #[error("no layout has been generated")]
    NoSession,
}

/// Result type for engine operations
pub type CloudResult<T> = Result<T, CloudError>;
