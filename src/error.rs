//! Error types for the digit classifier.

use std::fmt;
use std::io;

use thiserror::Error;

/// A location in the dataset text, reported alongside parse failures.
///
/// Rows count from 1. The column is the 1-based index of the most
/// recently consumed byte on that row (0 before anything on the row
/// has been consumed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.row, self.col)
    }
}

/// Failures raised by the network engine at its call boundaries.
///
/// A failing call never partially mutates the network: all validation
/// happens before the first parameter update.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Construction rejected the requested layer widths.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// An input vector's width does not match the network's input size.
    #[error("input width mismatch: expected {expected}, got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    /// A target vector's width does not match the network's output size.
    #[error("target width mismatch: expected {expected}, got {actual}")]
    TargetWidthMismatch { expected: usize, actual: usize },

    /// Training was invoked without any samples.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// The input and target sets disagree on the number of samples.
    #[error("sample count mismatch: {inputs} inputs vs {targets} targets")]
    SampleCountMismatch { inputs: usize, targets: usize },
}

/// Failures raised while reading a digits dataset.
///
/// Every variant carries the [`Position`] the reader had reached when
/// the failure was detected, so callers can point at the offending spot
/// in the file.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("read failed at {position}: {source}")]
    Io {
        position: Position,
        #[source]
        source: io::Error,
    },

    #[error("illegal character {found:?} at {position}")]
    IllegalCharacter { found: char, position: Position },

    #[error("number too large at {position}")]
    NumberOverflow { position: Position },

    #[error("expected a number before separator at {position}")]
    MissingNumber { position: Position },

    #[error("missing sample count at {position}")]
    MissingSampleCount { position: Position },

    #[error("missing class count at {position}")]
    MissingClassCount { position: Position },

    #[error("dataset declares zero samples at {position}")]
    NoSamples { position: Position },

    #[error("dataset declares zero classes at {position}")]
    NoClasses { position: Position },

    #[error("class index {class} out of range (expected < {limit}) at {position}")]
    ClassOutOfRange {
        class: u32,
        limit: u32,
        position: Position,
    },

    #[error("pixel value {value} out of range (expected <= {limit}) at {position}")]
    PixelOutOfRange {
        value: u32,
        limit: u32,
        position: Position,
    },

    #[error("dataset ended after {got} of {expected} samples at {position}")]
    TooFewSamples {
        got: usize,
        expected: usize,
        position: Position,
    },

    #[error("sample truncated after {got} of {expected} pixels at {position}")]
    IncompleteSample {
        got: usize,
        expected: usize,
        position: Position,
    },

    #[error("unexpected data after the declared samples at {position}")]
    TrailingData { position: Position },
}
