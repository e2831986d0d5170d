//! Workspace for reusable analysis-pass buffers.
//!
//! This module provides a pre-allocated workspace to minimize dynamic
//! memory allocations across analysis passes. One workspace belongs to one
//! worker; reusing it across charts keeps the hot path allocation-free
//! after warm-up.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::mods::RollingState;
use crate::algorithms::segment::IntervalData;
use crate::math::fast::FastFloat;

/// Pre-allocated buffers and rolling state for one analysis pass.
///
/// Reset at the start of each chart's analysis, so a reused workspace
/// produces exactly the same ratings as a fresh one.
#[derive(Debug, Clone)]
pub struct CalcWorkspace<T> {
    /// The reusable per-interval record the segmenter fills.
    pub interval: IntervalData<T>,
    /// Cross-interval accumulator for dependent mods.
    pub rolling: RollingState<T>,
    /// Per-mod, per-interval values: `mod_values[mod][interval]`.
    pub mod_values: Vec<Vec<T>>,
    /// Press count per interval.
    pub note_counts: Vec<usize>,
    /// Per-interval scalar scratch, reused per category.
    pub scalars: Vec<T>,
}

impl<T: FastFloat> CalcWorkspace<T> {
    /// Create a workspace sized for `column_count` columns and `mod_count` mods.
    pub fn new(column_count: usize, mod_count: usize) -> Self {
        Self {
            interval: IntervalData::new(column_count),
            rolling: RollingState::new(),
            mod_values: vec![Vec::new(); mod_count],
            note_counts: Vec::new(),
            scalars: Vec::new(),
        }
    }

    /// Reset for a new pass, resizing for the pass's play style and registry.
    ///
    /// Note: Does not deallocate, only resets logical lengths.
    pub fn reset(&mut self, column_count: usize, mod_count: usize) {
        self.interval.resize(column_count);
        self.rolling.reset();
        if self.mod_values.len() != mod_count {
            self.mod_values.resize(mod_count, Vec::new());
        }
        for series in self.mod_values.iter_mut() {
            series.clear();
        }
        self.note_counts.clear();
        self.scalars.clear();
    }
}
