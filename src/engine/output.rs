//! Result records: ratings and diagnostic series.
//!
//! One [`CalcResult`] is produced per (chart, play style) pass. Ratings
//! are immutable after creation; the optional per-interval mod series is
//! populated only when the configuration asks for it, for
//! difficulty-over-time consumers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::evaluation::blend::SkillCategory;

// ============================================================================
// Output Records
// ============================================================================

/// Final rating for one skill category, clamped into the published range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillRating<T> {
    /// The rated category.
    pub category: SkillCategory,
    /// The rating value, always finite.
    pub value: T,
}

/// One pattern mod's per-interval trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ModSeries<T> {
    /// The mod's registered name.
    pub name: &'static str,
    /// The mod's value for each interval, in interval order.
    pub values: Vec<T>,
}

/// The output of one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult<T> {
    /// One rating per configured skill category, in configuration order.
    pub ratings: Vec<SkillRating<T>>,
    /// Number of intervals the chart segmented into.
    pub intervals: usize,
    /// Number of press demands (taps and hold heads) across the chart.
    pub notes: usize,
    /// Per-interval mod traces, when the configuration requested them.
    pub series: Option<Vec<ModSeries<T>>>,
}

impl<T: Copy> CalcResult<T> {
    /// The rating for one category, if it was configured.
    pub fn rating(&self, category: SkillCategory) -> Option<T> {
        self.ratings
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.value)
    }

    /// The per-interval trace for one mod, if series were requested.
    pub fn mod_series(&self, name: &str) -> Option<&ModSeries<T>> {
        self.series
            .as_ref()
            .and_then(|s| s.iter().find(|m| m.name == name))
    }
}
