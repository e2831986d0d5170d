//! Note and timeline data model.
//!
//! ## Purpose
//!
//! This module defines the immutable input records the engine consumes: a
//! single note event, and a borrowed, read-only view over one chart's
//! ordered sequence of events for a fixed play style.
//!
//! ## Design notes
//!
//! * **Borrowed input**: The caller owns the event storage; the engine only
//!   borrows it for the duration of one analysis pass.
//! * **Position axis**: Positions are plain numbers; whether they are
//!   seconds or beats is declared in the configuration and does not change
//!   any arithmetic here.
//! * **No validation on construction**: Well-formedness (column ranges,
//!   monotonic positions) is checked by `engine::validator` at the start of
//!   a pass, keeping these types trivially cheap to build.
//!
//! ## Invariants
//!
//! * Events are expected in non-decreasing position order; equal positions
//!   form a chord row.
//!
//! ## Non-goals
//!
//! * This module does not load or parse chart files.

// External dependencies
use num_traits::Float;

// ============================================================================
// Note Kind
// ============================================================================

/// The kind of a note event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// A plain tap note.
    Tap,

    /// The start of a hold note. Counts as a tap demand.
    HoldHead,

    /// The release point of a hold note. Carries no tap demand.
    HoldTail,
}

// ============================================================================
// Note Event
// ============================================================================

/// One immutable note event in a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent<T> {
    /// Position on the chart's time/beat axis.
    pub position: T,
    /// Zero-based column index.
    pub column: usize,
    /// What kind of event this is.
    pub kind: NoteKind,
}

impl<T: Float> NoteEvent<T> {
    /// Create a note event.
    pub fn new(position: T, column: usize, kind: NoteKind) -> Self {
        Self {
            position,
            column,
            kind,
        }
    }

    /// Create a plain tap at the given position and column.
    pub fn tap(position: T, column: usize) -> Self {
        Self::new(position, column, NoteKind::Tap)
    }

    /// Whether this event demands a press (tap or hold head).
    #[inline]
    pub fn is_press(&self) -> bool {
        matches!(self.kind, NoteKind::Tap | NoteKind::HoldHead)
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// A read-only view over one chart's ordered note events.
///
/// The engine borrows the caller's event storage; nothing is copied. One
/// timeline describes one (chart, play style) pair with a fixed column
/// count.
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a, T> {
    events: &'a [NoteEvent<T>],
    column_count: usize,
}

impl<'a, T: Float> Timeline<'a, T> {
    /// Wrap an ordered event slice for a play style with `column_count` columns.
    pub fn new(events: &'a [NoteEvent<T>], column_count: usize) -> Self {
        Self {
            events,
            column_count,
        }
    }

    /// The ordered note events.
    #[inline]
    pub fn events(&self) -> &'a [NoteEvent<T>] {
        self.events
    }

    /// The play style's column count.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of events in the timeline.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the timeline has no events.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
