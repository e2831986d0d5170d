//! Interval segmentation of a note timeline.
//!
//! ## Purpose
//!
//! This module splits a chart's note timeline into contiguous fixed-width
//! intervals and derives, per interval, the note counts, chord rows, and
//! per-column inter-note timing deltas that pattern mods consume.
//!
//! ## Design notes
//!
//! * **Anchored grid**: The grid is anchored at the first event's position,
//!   so interval `k` covers `[first + k·w, first + (k+1)·w)`. Ratings are
//!   exactly invariant to chart offset and no leading empty intervals
//!   dilute the chart mean.
//! * **Forward-only cursor**: The segmenter walks the event slice once and
//!   fills a caller-provided reusable [`IntervalData`], so a pass over a
//!   chart performs no per-interval allocation after warm-up.
//! * **Deltas, not positions**: Mods see elapsed time between consecutive
//!   presses, including the gap spanning in from the previous interval.
//!
//! ## Invariants
//!
//! * Every event belongs to exactly one interval (partition: no gaps, no
//!   overlaps); intervals are produced in position order.
//! * The trailing partial interval is retained, so any non-empty timeline
//!   produces at least one interval.
//! * An empty timeline produces zero intervals.
//!
//! ## Non-goals
//!
//! * This module does not validate the timeline (see `engine::validator`).
//! * This module does not evaluate pattern mods.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::fast::FastFloat;
use crate::math::stats::mean;
use crate::primitives::notes::{NoteEvent, Timeline};

// ============================================================================
// Interval Unit
// ============================================================================

/// Interpretation of the position axis.
///
/// The segmenter itself is unit-agnostic; this tag only documents whether
/// interval widths and note rates are per second or per beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalUnit {
    /// Positions are seconds; rates are notes per second.
    #[default]
    Seconds,

    /// Positions are beats; rates are notes per beat.
    Beats,
}

// ============================================================================
// Interval Data
// ============================================================================

/// Reusable per-interval record filled by the segmenter.
///
/// One instance is allocated per pass and refilled for each interval; the
/// nested vectors keep their capacity across intervals.
#[derive(Debug, Clone)]
pub struct IntervalData<T> {
    /// Zero-based interval index within the pass.
    pub index: usize,
    /// Inclusive start position.
    pub start: T,
    /// Exclusive end position (`start + nominal width`).
    pub end: T,
    /// Events assigned to this interval, of any kind.
    pub event_count: usize,
    /// Press demands (taps and hold heads) in this interval.
    pub note_count: usize,
    /// Rows: groups of presses sharing one position.
    pub row_count: usize,
    /// Rows containing two or more simultaneous presses.
    pub chord_rows: usize,
    /// Presses per column.
    pub column_counts: Vec<usize>,
    /// Ordered inter-press gaps per column, including the gap spanning in
    /// from the previous interval.
    pub column_deltas: Vec<Vec<T>>,
    /// All gaps pooled in event order across columns.
    pub gaps: Vec<T>,
}

impl<T: FastFloat> IntervalData<T> {
    /// Create an empty record for a play style with `column_count` columns.
    pub fn new(column_count: usize) -> Self {
        Self {
            index: 0,
            start: T::zero(),
            end: T::zero(),
            event_count: 0,
            note_count: 0,
            row_count: 0,
            chord_rows: 0,
            column_counts: vec![0; column_count],
            column_deltas: vec![Vec::new(); column_count],
            gaps: Vec::new(),
        }
    }

    /// Resize for a new column count and clear all contents.
    pub fn resize(&mut self, column_count: usize) {
        self.column_counts.clear();
        self.column_counts.resize(column_count, 0);
        self.column_deltas.clear();
        self.column_deltas.resize(column_count, Vec::new());
        self.gaps.clear();
    }

    /// Reset counters for the next interval, keeping buffer capacity.
    fn reset(&mut self, index: usize, start: T, end: T) {
        self.index = index;
        self.start = start;
        self.end = end;
        self.event_count = 0;
        self.note_count = 0;
        self.row_count = 0;
        self.chord_rows = 0;
        for count in self.column_counts.iter_mut() {
            *count = 0;
        }
        for deltas in self.column_deltas.iter_mut() {
            deltas.clear();
        }
        self.gaps.clear();
    }

    /// Nominal interval width.
    #[inline]
    pub fn width(&self) -> T {
        self.end - self.start
    }

    /// Press rate: presses per position unit over the nominal width.
    #[inline]
    pub fn note_rate(&self) -> T {
        T::from(self.note_count).unwrap() / self.width()
    }

    /// Mean inter-press gap across all columns, if any gap was observed.
    #[inline]
    pub fn mean_gap(&self) -> Option<T> {
        if self.gaps.is_empty() {
            None
        } else {
            Some(mean(&self.gaps))
        }
    }
}

// ============================================================================
// Segmenter
// ============================================================================

/// Forward-only cursor producing intervals over one timeline.
///
/// Created per pass; carries the last press position per column across
/// interval boundaries so spanning gaps are derived.
#[derive(Debug)]
pub struct Segmenter<'a, T> {
    events: &'a [NoteEvent<T>],
    width: T,
    origin: T,
    cursor: usize,
    interval_index: usize,
    total: usize,
    last_seen: Vec<Option<T>>,
}

impl<'a, T: FastFloat> Segmenter<'a, T> {
    /// Create a segmenter over `timeline` with the given nominal width.
    ///
    /// `width` must be finite and positive (validated upstream).
    pub fn new(timeline: &Timeline<'a, T>, width: T) -> Self {
        let events = timeline.events();
        let (origin, total) = match (events.first(), events.last()) {
            (Some(first), Some(last)) => {
                let span = last.position - first.position;
                let total = (span / width).floor().to_usize().unwrap_or(0) + 1;
                (first.position, total)
            }
            _ => (T::zero(), 0),
        };
        Self {
            events,
            width,
            origin,
            cursor: 0,
            interval_index: 0,
            total,
            last_seen: vec![None; timeline.column_count()],
        }
    }

    /// Total number of intervals this pass will produce.
    #[inline]
    pub fn interval_count(&self) -> usize {
        self.total
    }

    /// Fill `data` with the next interval and advance.
    ///
    /// Returns `false` once the timeline is exhausted. Intervals come out
    /// in position order; the final interval absorbs any event that float
    /// rounding would push past its nominal end, preserving the partition.
    pub fn next_into(&mut self, data: &mut IntervalData<T>) -> bool {
        if self.interval_index >= self.total {
            return false;
        }

        let start = self.origin + T::from(self.interval_index).unwrap() * self.width;
        let end = start + self.width;
        data.reset(self.interval_index, start, end);

        let last_interval = self.interval_index + 1 == self.total;
        let mut row_position: Option<T> = None;
        let mut row_len = 0usize;

        while self.cursor < self.events.len() {
            let event = &self.events[self.cursor];
            if !last_interval && event.position >= end {
                break;
            }
            data.event_count += 1;
            if event.is_press() {
                data.note_count += 1;
                data.column_counts[event.column] += 1;

                if row_position == Some(event.position) {
                    row_len += 1;
                    if row_len == 2 {
                        data.chord_rows += 1;
                    }
                } else {
                    data.row_count += 1;
                    row_position = Some(event.position);
                    row_len = 1;
                }

                if let Some(previous) = self.last_seen[event.column] {
                    let gap = event.position - previous;
                    data.column_deltas[event.column].push(gap);
                    data.gaps.push(gap);
                }
                self.last_seen[event.column] = Some(event.position);
            }
            self.cursor += 1;
        }

        self.interval_index += 1;
        true
    }
}
