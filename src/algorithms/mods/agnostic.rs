//! Agnostic pattern mods: functions of one interval's own contents.

// Internal dependencies
use crate::algorithms::mods::{ModParams, RollingState};
use crate::algorithms::segment::IntervalData;
use crate::math::fast::{clamp, div_low_by_high, neutral, FastFloat};
use crate::math::stats::coefficient_of_variation;

/// Column skew: how unevenly presses are distributed across columns.
///
/// Measured as `div_low_by_high(min column count, max column count)` and
/// mapped so a perfectly even spread yields the neutral value and a dead
/// column yields the clamp ceiling. An interval with no presses at all is
/// neutral.
pub fn balance<T: FastFloat>(
    interval: &IntervalData<T>,
    _state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    let mut min = usize::MAX;
    let mut max = 0usize;
    for &count in &interval.column_counts {
        if count < min {
            min = count;
        }
        if count > max {
            max = count;
        }
    }
    if max == 0 {
        return neutral();
    }
    // max > 0, so the larger operand is nonzero and no division by zero
    // can occur; an idle column gives ratio 0, maximum skew.
    let ratio = div_low_by_high(T::from(min).unwrap(), T::from(max).unwrap());
    let value = neutral::<T>() + (T::one() - ratio) * (params.clamp_high - neutral::<T>());
    clamp(value, params.clamp_low, params.clamp_high)
}

/// Note pressure: local press rate shaped against the reference rate.
///
/// `fast_pow(rate / reference, shape)`, monotone in the interval's press
/// count. Zero presses is neutral.
pub fn density<T: FastFloat>(
    interval: &IntervalData<T>,
    _state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    if interval.note_count == 0 {
        return neutral();
    }
    let relative = interval.note_rate() / params.reference_rate;
    let value = relative.fast_pow(params.shape);
    clamp(value, params.clamp_low, params.clamp_high)
}

/// Timing unevenness: dispersion of the interval's inter-press gaps.
///
/// The coefficient of variation of all gaps (columns pooled) scaled by the
/// shaping gain and pushed above neutral. Fewer than two gaps, or a
/// degenerate zero mean, is neutral.
pub fn gap_spread<T: FastFloat>(
    interval: &IntervalData<T>,
    _state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    if interval.gaps.len() < 2 {
        return neutral();
    }
    let spread = coefficient_of_variation(&interval.gaps);
    if !spread.is_finite() {
        return neutral();
    }
    let value = neutral::<T>() + spread * params.shape;
    clamp(value, params.clamp_low, params.clamp_high)
}

/// Simultaneity: the fraction of rows that are chords.
///
/// Mapped from neutral (no chords) up toward the clamp ceiling (every row
/// a chord). No rows is neutral.
pub fn chord_pressure<T: FastFloat>(
    interval: &IntervalData<T>,
    _state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    if interval.row_count == 0 {
        return neutral();
    }
    let fraction = T::from(interval.chord_rows).unwrap() / T::from(interval.row_count).unwrap();
    let value = neutral::<T>() + fraction * (params.clamp_high - neutral::<T>());
    clamp(value, params.clamp_low, params.clamp_high)
}
