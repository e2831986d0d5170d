//! Statistical aggregators over per-interval scalars.
//!
//! ## Purpose
//!
//! This module provides the three aggregators the blend stage relies on:
//! sum, arithmetic mean, and the coefficient of variation (population
//! standard deviation over mean).
//!
//! ## Design notes
//!
//! * **Fast square root**: The dispersion measure uses [`FastFloat::fast_sqrt`];
//!   relative ranking across charts matters more than absolute precision.
//! * **Degenerate results**: `mean` of an empty slice and
//!   `coefficient_of_variation` of a zero-mean slice are degenerate
//!   (NaN/infinity). Callers guard before calling; nothing here panics.
//!
//! ## Key concepts
//!
//! * **Coefficient of variation**: A scale-free dispersion measure. High
//!   CV over a chart's intervals means the patterns vary a lot (harder to
//!   adapt to); low CV means uniformity.
//!
//! ## Non-goals
//!
//! * This module does not decide what to do with degenerate values; the
//!   aggregation boundary substitutes neutral values (see `evaluation::blend`).

// External dependencies
use crate::math::fast::FastFloat;

// ============================================================================
// Aggregators
// ============================================================================

/// Total of a sequence. Identity element `0` for an empty sequence.
#[inline]
pub fn sum<T: FastFloat>(values: &[T]) -> T {
    T::sum_slice(values)
}

/// Arithmetic mean of a sequence.
///
/// Degenerate (NaN) on an empty sequence; callers guard.
#[inline]
pub fn mean<T: FastFloat>(values: &[T]) -> T {
    sum(values) / T::from(values.len()).unwrap()
}

/// Coefficient of variation: population standard deviation over mean.
///
/// The square root goes through [`FastFloat::fast_sqrt`], so results carry
/// its (small) relative error. Degenerate when the mean is zero; callers
/// guard.
#[inline]
pub fn coefficient_of_variation<T: FastFloat>(values: &[T]) -> T {
    let average = mean(values);
    let variance = T::sum_sq_dev(values, average) / T::from(values.len()).unwrap();
    variance.fast_sqrt() / average
}
