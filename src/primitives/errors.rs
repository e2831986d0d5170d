//! Error types for chart rating configuration and input validation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate: builder validation, timeline validation, and
//! category/registry resolution.
//!
//! ## Design notes
//!
//! * **Single enum**: One flat error type keeps the API surface small.
//! * **Exact messages**: `Display` strings are stable and covered by tests.
//! * **no_std**: Implements `core::fmt::Display`; `std::error::Error` is
//!   gated behind the `std` feature.
//!
//! ## Key concepts
//!
//! * **Unratable input**: Malformed timelines produce an error, never
//!   undefined behavior or a partial result.
//! * **Degenerate vs. invalid**: Degenerate-but-well-formed inputs (e.g. an
//!   empty timeline) are *not* errors; they resolve to floor ratings.
//!
//! ## Non-goals
//!
//! * This module does not perform any validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by configuration or input validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The play style declares zero columns.
    EmptyColumns,

    /// A note references a column outside `[0, column_count)`.
    ColumnOutOfRange {
        /// Index of the offending note in the timeline.
        index: usize,
        /// The out-of-range column.
        column: usize,
        /// The declared column count.
        column_count: usize,
    },

    /// Note positions decrease at the given index.
    NonMonotonicPosition {
        /// Index of the note whose position is smaller than its predecessor's.
        index: usize,
    },

    /// A position or parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// The interval width is not finite and positive.
    InvalidIntervalWidth(f64),

    /// A pattern-mod blend weight is negative or non-finite.
    InvalidModWeight {
        /// Name of the mod whose weight is invalid.
        name: String,
        /// The offending weight.
        weight: f64,
    },

    /// The mod clamp range is inverted or non-finite.
    InvalidClampRange {
        /// Lower clamp bound.
        low: f64,
        /// Upper clamp bound.
        high: f64,
    },

    /// The published rating range is inverted or non-finite.
    InvalidRatingRange {
        /// Rating floor.
        floor: f64,
        /// Rating ceiling.
        ceiling: f64,
    },

    /// The rolling-state smoothing factor is outside (0, 1].
    InvalidSmoothing(f64),

    /// A category mapping or weight refers to a mod not present in the registry.
    UnknownMod(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::EmptyColumns => {
                write!(f, "Play style declares zero columns")
            }
            CalcError::ColumnOutOfRange {
                index,
                column,
                column_count,
            } => {
                write!(
                    f,
                    "Note {} references column {} (column count is {})",
                    index, column, column_count
                )
            }
            CalcError::NonMonotonicPosition { index } => {
                write!(f, "Note positions decrease at index {}", index)
            }
            CalcError::InvalidNumericValue(what) => {
                write!(f, "Invalid numeric value: {}", what)
            }
            CalcError::InvalidIntervalWidth(width) => {
                write!(
                    f,
                    "Invalid interval width: {} (must be finite and > 0)",
                    width
                )
            }
            CalcError::InvalidModWeight { name, weight } => {
                write!(
                    f,
                    "Invalid weight for mod '{}': {} (must be finite and >= 0)",
                    name, weight
                )
            }
            CalcError::InvalidClampRange { low, high } => {
                write!(
                    f,
                    "Invalid mod clamp range: [{}, {}] (must be finite with low <= high)",
                    low, high
                )
            }
            CalcError::InvalidRatingRange { floor, ceiling } => {
                write!(
                    f,
                    "Invalid rating range: [{}, {}] (must be finite with floor <= ceiling)",
                    floor, ceiling
                )
            }
            CalcError::InvalidSmoothing(alpha) => {
                write!(f, "Invalid smoothing factor: {} (must be in (0, 1])", alpha)
            }
            CalcError::UnknownMod(name) => {
                write!(f, "Unknown pattern mod: '{}'", name)
            }
            CalcError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalcError {}
