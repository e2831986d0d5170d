//! Skill categories and the aggregation/blend stage.
//!
//! ## Purpose
//!
//! This module turns the per-interval, per-mod values for a whole chart
//! into one rating per skill category: it defines the categories, the
//! static category-to-mod table, the per-interval combine, and the
//! chart-level reduce.
//!
//! ## Design notes
//!
//! * **Note-weighted mean**: The chart-level mean is built with
//!   `weighted_average` over cumulative note counts, so dense intervals
//!   influence the rating proportionally more than sparse ones.
//! * **CV inflation**: The mean is inflated by the coefficient of
//!   variation of the per-interval series; irregular demands across a
//!   chart are harder than uniform ones.
//! * **Fixed reduction order**: Everything folds left-to-right in interval
//!   order. No unordered containers touch the numeric path, so ratings are
//!   bit-for-bit reproducible.
//!
//! ## Invariants
//!
//! * Non-finite values never cross this boundary: a non-finite interval
//!   scalar is replaced by the neutral value, and a non-finite rating
//!   collapses to the floor before the final clamp.
//! * The returned rating is inside `[floor, ceiling]`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate pattern mods or segment timelines.

// Internal dependencies
use crate::math::fast::{clamp, neutral, weighted_average, FastFloat};
use crate::math::stats::{coefficient_of_variation, mean};

// ============================================================================
// Skill Categories
// ============================================================================

/// A skill category: one final rating is produced per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    /// Single-note streams: raw speed over evenly loaded columns.
    Stream,

    /// Uneven, irregular patterning that is hard to read and time.
    Technical,

    /// Dense simultaneous chords.
    Chordjack,

    /// Sustained output over long stretches.
    Stamina,
}

impl SkillCategory {
    /// Every category, in rating output order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Stream,
        SkillCategory::Technical,
        SkillCategory::Chordjack,
        SkillCategory::Stamina,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::Stream => "stream",
            SkillCategory::Technical => "technical",
            SkillCategory::Chordjack => "chordjack",
            SkillCategory::Stamina => "stamina",
        }
    }

    /// The built-in category-to-mod table.
    ///
    /// A static configuration mapping, resolved against the registry when
    /// a calculator is built so unknown names fail fast.
    pub fn default_mods(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Stream => &["balance", "density", "surge"],
            SkillCategory::Technical => &["gap_spread", "balance", "surge"],
            SkillCategory::Chordjack => &["chord_pressure", "density"],
            SkillCategory::Stamina => &["fatigue", "density"],
        }
    }
}

// ============================================================================
// Per-Interval Combine
// ============================================================================

/// Sanitize one value at the aggregation boundary.
///
/// Non-finite inputs (a bug in a mod, or an infinity out of an unguarded
/// ratio) are replaced by the neutral value rather than propagated.
#[inline]
pub fn sanitize<T: FastFloat>(value: T) -> T {
    if value.is_finite() {
        value
    } else {
        neutral()
    }
}

/// Base difficulty of one interval from its press rate.
///
/// `scale * fast_pow(rate, exponent)` for a positive rate; an interval
/// with no presses contributes zero.
#[inline]
pub fn base_difficulty<T: FastFloat>(rate: T, exponent: T, scale: T) -> T {
    if rate <= T::zero() {
        return T::zero();
    }
    scale * rate.fast_pow(exponent)
}

/// Fold one mod value into an interval scalar.
///
/// The mod enters the blend as `fast_pow(value, weight)`: weight 1 is a
/// plain product term, weight 0 disables the mod, and fractional weights
/// soften its influence. Mod values are positive by construction (clamped
/// around neutral), so the power is defined.
#[inline]
pub fn apply_mod<T: FastFloat>(scalar: T, mod_value: T, weight: T) -> T {
    scalar * mod_value.fast_pow(weight)
}

// ============================================================================
// Chart-Level Reduce
// ============================================================================

/// Reduce a chart's per-interval scalars into one clamped rating.
///
/// The scalars and their note counts run in interval order. The rating is
/// the note-count-weighted mean of the series, inflated by the series'
/// coefficient of variation, then clamped into `[floor, ceiling]`. A chart
/// with no notes rates at the floor.
pub fn reduce_chart<T: FastFloat>(
    scalars: &[T],
    note_counts: &[usize],
    cv_weight: T,
    floor: T,
    ceiling: T,
) -> T {
    debug_assert_eq!(scalars.len(), note_counts.len());
    if scalars.is_empty() {
        return floor;
    }

    // Note-count-weighted running mean, folded in interval order.
    let mut cumulative = T::zero();
    let mut average = T::zero();
    for (&scalar, &notes) in scalars.iter().zip(note_counts.iter()) {
        if notes == 0 {
            continue;
        }
        let weight = T::from(notes).unwrap();
        let new_cumulative = cumulative + weight;
        average = weighted_average(sanitize(scalar), average, weight, new_cumulative);
        cumulative = new_cumulative;
    }
    if cumulative <= T::zero() {
        return floor;
    }

    // Dispersion across the whole series; a zero-mean series is uniform
    // by definition, and a non-finite CV is discarded the same way.
    let series_mean = mean(scalars);
    let dispersion = if series_mean > T::zero() {
        let cv = coefficient_of_variation(scalars);
        if cv.is_finite() {
            cv
        } else {
            T::zero()
        }
    } else {
        T::zero()
    };

    let mut rating = average * (T::one() + cv_weight * dispersion);
    if !rating.is_finite() {
        rating = floor;
    }
    clamp(rating, floor, ceiling)
}
