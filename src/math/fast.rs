//! Approximate fast primitives and exact helper functions.
//!
//! ## Purpose
//!
//! This module provides the low-precision-tolerant arithmetic the rating
//! pipeline is built on: approximate exponentiation and square roots via
//! IEEE-754 bit manipulation, plus exact clamp, ordered-ratio,
//! ordered-difference, and cumulative-blend helpers.
//!
//! ## Design notes
//!
//! * **Trait bridge**: Generic code bounds on [`FastFloat`], which bridges
//!   `num_traits::Float` to per-type approximate kernels and SIMD
//!   accumulation, so the pipeline stays generic over `f32`/`f64`.
//! * **Safe bit manipulation**: All bit tricks go through `to_bits`/
//!   `from_bits`. Rust guarantees IEEE-754 binary32/binary64 layout for
//!   `f32`/`f64`, so no endianness or representation assumption leaks in.
//! * **Determinism**: SIMD accumulation uses a fixed lane order; results
//!   are bit-identical across runs on the same target.
//!
//! ## Key concepts
//!
//! * **Neutral value**: `1.0` is the documented sentinel meaning "no
//!   adjustment". Pattern mods return it both as their identity output and
//!   as the substitute in degenerate cases.
//! * **Accuracy contract**: `fast_pow` and `fast_sqrt` trade correctness
//!   for speed. They are for statistical shaping where relative ranking
//!   matters more than absolute precision, never for exact arithmetic.
//!
//! ## Invariants
//!
//! * `clamp(x, lo, hi)` is in `[lo, hi]` whenever `lo <= hi`.
//! * `div_high_by_low` is symmetric in its arguments and `>= 1` for
//!   positive inputs; `div_low_by_high` is in `[0, 1]` for positive inputs.
//! * `diff_high_by_low` is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not guard against non-finite propagation; that is
//!   the aggregation boundary's job (see `evaluation::blend`).

// External dependencies
use core::fmt::Debug;
use core::ops::Sub;
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// Neutral Sentinel
// ============================================================================

/// The neutral pattern-mod value: `1.0`, meaning "no adjustment".
///
/// Mods return this both when an interval is perfectly ordinary and when
/// there is not enough data to measure anything (the degenerate-case
/// substitution rule).
#[inline]
pub fn neutral<T: Float>() -> T {
    T::one()
}

// ============================================================================
// FastFloat Trait
// ============================================================================

/// Bridge from generic `Float` code to per-type fast kernels.
///
/// Mirrors the shape of the values flowing through the pipeline: positions,
/// gaps, mod values, and ratings are all the same scalar type. Implemented
/// for `f32` and `f64`.
pub trait FastFloat: Float + Debug + Send + Sync + 'static {
    /// Approximate `self ^ exponent` via exponent-field linearization.
    ///
    /// Treats the IEEE-754 exponent field as a linear proxy for the
    /// logarithm, scales it, and reinterprets the bits. Relative error is
    /// on the order of a few percent for moderate bases and exponents.
    ///
    /// Behavior is defined only for positive finite `self`. Do not use
    /// where exact powers are required.
    fn fast_pow(self, exponent: Self) -> Self;

    /// Approximate `sqrt(self)` as `self * rsqrt(self)`.
    ///
    /// Returns `0` for input `0`. Uses the magic-constant reciprocal
    /// square root with one Newton refinement step; relative error is well
    /// under one percent. Only for dispersion measures, never for exact
    /// geometric distances.
    fn fast_sqrt(self) -> Self;

    /// Total of a slice, SIMD main loop plus scalar tail, fixed lane order.
    ///
    /// Identity element `0` for an empty slice.
    fn sum_slice(values: &[Self]) -> Self;

    /// `Σ (vᵢ - mean)²` over a slice, SIMD main loop plus scalar tail.
    fn sum_sq_dev(values: &[Self], mean: Self) -> Self;
}

impl FastFloat for f32 {
    #[inline]
    fn fast_pow(self, exponent: f32) -> f32 {
        // (127 - sigma) * 2^23 with sigma = 0.0450466
        const BIAS: f32 = 1_064_866_805.0;
        let i = self.to_bits() as i32;
        let j = (exponent * (i as f32 - BIAS) + BIAS) as i32;
        f32::from_bits(j as u32)
    }

    #[inline]
    fn fast_sqrt(self) -> f32 {
        if self == 0.0 {
            return 0.0;
        }
        let i = 0x5f37_59df_u32.wrapping_sub(self.to_bits() >> 1);
        let mut r = f32::from_bits(i);
        r *= 1.5 - 0.5 * self * r * r;
        self * r
    }

    #[inline]
    fn sum_slice(values: &[f32]) -> f32 {
        let mut lanes = f32x4::splat(0.0);
        let mut chunks = values.chunks_exact(4);
        for c in &mut chunks {
            lanes += f32x4::new([c[0], c[1], c[2], c[3]]);
        }
        let mut total = lanes.reduce_add();
        for &v in chunks.remainder() {
            total += v;
        }
        total
    }

    #[inline]
    fn sum_sq_dev(values: &[f32], mean: f32) -> f32 {
        let m = f32x4::splat(mean);
        let mut lanes = f32x4::splat(0.0);
        let mut chunks = values.chunks_exact(4);
        for c in &mut chunks {
            let d = f32x4::new([c[0], c[1], c[2], c[3]]) - m;
            lanes += d * d;
        }
        let mut total = lanes.reduce_add();
        for &v in chunks.remainder() {
            let d = v - mean;
            total += d * d;
        }
        total
    }
}

impl FastFloat for f64 {
    #[inline]
    fn fast_pow(self, exponent: f64) -> f64 {
        // (1023 - sigma) * 2^20 on the high word, sigma = 0.0450466
        const BIAS: f64 = 1_072_632_447.0;
        let hi = (self.to_bits() >> 32) as i32;
        let hi = (exponent * (hi as f64 - BIAS) + BIAS) as i32;
        f64::from_bits(((hi as u32) as u64) << 32)
    }

    #[inline]
    fn fast_sqrt(self) -> f64 {
        if self == 0.0 {
            return 0.0;
        }
        let i = 0x5FE6_EB50_C7B5_37A9_u64.wrapping_sub(self.to_bits() >> 1);
        let mut r = f64::from_bits(i);
        r *= 1.5 - 0.5 * self * r * r;
        self * r
    }

    #[inline]
    fn sum_slice(values: &[f64]) -> f64 {
        let mut lanes = f64x2::splat(0.0);
        let mut chunks = values.chunks_exact(2);
        for c in &mut chunks {
            lanes += f64x2::new([c[0], c[1]]);
        }
        let mut total = lanes.reduce_add();
        for &v in chunks.remainder() {
            total += v;
        }
        total
    }

    #[inline]
    fn sum_sq_dev(values: &[f64], mean: f64) -> f64 {
        let m = f64x2::splat(mean);
        let mut lanes = f64x2::splat(0.0);
        let mut chunks = values.chunks_exact(2);
        for c in &mut chunks {
            let d = f64x2::new([c[0], c[1]]) - m;
            lanes += d * d;
        }
        let mut total = lanes.reduce_add();
        for &v in chunks.remainder() {
            let d = v - mean;
            total += d * d;
        }
        total
    }
}

// ============================================================================
// Exact Helpers
// ============================================================================

/// Clamp `x` into `[low, high]`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, low: T, high: T) -> T {
    if x > high {
        high
    } else if x < low {
        low
    } else {
        x
    }
}

/// `max(a, b) / min(a, b)`.
///
/// Symmetric in its arguments; `>= 1` whenever both inputs are positive.
/// The caller guarantees the smaller operand is nonzero; a zero divisor
/// propagates IEEE infinity, which the aggregation boundary guards against.
#[inline]
pub fn div_high_by_low<T: Float>(a: T, b: T) -> T {
    let (hi, lo) = if b > a { (b, a) } else { (a, b) };
    hi / lo
}

/// `min(a, b) / max(a, b)`.
///
/// In `[0, 1]` when both inputs are positive; equals 1 iff `a == b`.
#[inline]
pub fn div_low_by_high<T: Float>(a: T, b: T) -> T {
    let (hi, lo) = if b > a { (b, a) } else { (a, b) };
    lo / hi
}

/// `max(a, b) - min(a, b)`, always non-negative.
///
/// Generic over ordered subtractable types so it serves both counts and
/// positions.
#[inline]
pub fn diff_high_by_low<T: PartialOrd + Sub<Output = T>>(a: T, b: T) -> T {
    if b > a {
        b - a
    } else {
        a - b
    }
}

/// Linear blend `(x·a + (y - x)·b) / y`.
///
/// The blend ratio is implied by the cumulative quantities `x` and `y`
/// rather than an explicit `[0, 1]` weight; callers pass running
/// note counts or durations. `y == 0` is a caller contract violation.
#[inline]
pub fn weighted_average<T: Float>(a: T, b: T, x: T, y: T) -> T {
    debug_assert!(y != T::zero(), "weighted_average requires y != 0");
    (x * a + (y - x) * b) / y
}
