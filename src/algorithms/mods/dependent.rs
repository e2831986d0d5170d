//! Dependent pattern mods: functions with cross-interval memory.
//!
//! Each mod here reads and updates its own field of `RollingState` exactly
//! once per interval, in interval order. Reordering intervals changes the
//! output; the pass is a stateful stream, not a commutative reduction.

// Internal dependencies
use crate::algorithms::mods::{ModParams, RollingState};
use crate::algorithms::segment::IntervalData;
use crate::math::fast::{clamp, neutral, FastFloat};

/// Sustained acceleration: the current mean gap against the rolling one.
///
/// The ratio `rolling / current` exceeds 1 while taps arrive faster than
/// the chart's recent norm; `fast_pow(ratio, shape)` shapes it, and the
/// rolling mean is then pulled toward the current gap by the smoothing
/// factor. The first measurable interval seeds the rolling mean and
/// returns neutral. An interval with no gaps is neutral and leaves the
/// rolling mean untouched; that still counts as the interval's one state
/// tick.
pub fn surge<T: FastFloat>(
    interval: &IntervalData<T>,
    state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    let current = match interval.mean_gap() {
        Some(gap) if gap > T::zero() => gap,
        _ => return neutral(),
    };
    match state.rolling_gap {
        None => {
            state.rolling_gap = Some(current);
            neutral()
        }
        Some(rolling) => {
            let ratio = rolling / current;
            let value = ratio.fast_pow(params.shape);
            state.rolling_gap = Some(rolling + (current - rolling) * params.smoothing);
            clamp(value, params.clamp_low, params.clamp_high)
        }
    }
}

/// Stamina drain: a leaky accumulator of press rate above the reference.
///
/// The excess of the interval's press rate over the reference feeds the
/// accumulator, which relaxes toward the current excess by the smoothing
/// factor; sparse stretches drain it back toward zero. Output is neutral
/// plus the scaled fatigue level, so a rested chart reads 1.0 and a
/// sustained dense run pushes toward the clamp ceiling.
pub fn fatigue<T: FastFloat>(
    interval: &IntervalData<T>,
    state: &mut RollingState<T>,
    params: &ModParams<T>,
) -> T {
    let pressure = if interval.note_count == 0 {
        T::zero()
    } else {
        interval.note_rate() / params.reference_rate
    };
    let excess = if pressure > T::one() {
        pressure - T::one()
    } else {
        T::zero()
    };
    state.fatigue = state.fatigue + (excess - state.fatigue) * params.smoothing;
    let value = neutral::<T>() + state.fatigue * params.shape;
    clamp(value, params.clamp_low, params.clamp_high)
}
