//! Input and parameter validation.
//!
//! ## Purpose
//!
//! This module provides validation for the calculator's configuration
//! parameters and for incoming timelines. Malformed input yields a defined
//! error — the "unratable" result — never undefined behavior.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the
//!   per-event scan runs last.
//! * **Degenerate is not invalid**: An empty timeline passes validation;
//!   it rates at the floor by design.
//!
//! ## Invariants
//!
//! * Validated timelines have in-range columns, finite positions, and
//!   non-decreasing order (ties form chord rows).
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not perform the rating itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::mods::ModRegistry;
use crate::math::fast::FastFloat;
use crate::primitives::errors::CalcError;
use crate::primitives::notes::Timeline;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for calculator parameters and input timelines.
///
/// All methods return `Result<(), CalcError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a timeline against its declared play style.
    ///
    /// Checks, in order: non-zero column count, then per event: finite
    /// position, in-range column, non-decreasing position.
    pub fn validate_timeline<T: FastFloat>(timeline: &Timeline<'_, T>) -> Result<(), CalcError> {
        let column_count = timeline.column_count();
        if column_count == 0 {
            return Err(CalcError::EmptyColumns);
        }

        let mut previous: Option<T> = None;
        for (index, event) in timeline.events().iter().enumerate() {
            if !event.position.is_finite() {
                return Err(CalcError::InvalidNumericValue(format!(
                    "position[{}]={:?}",
                    index, event.position
                )));
            }
            if event.column >= column_count {
                return Err(CalcError::ColumnOutOfRange {
                    index,
                    column: event.column,
                    column_count,
                });
            }
            if let Some(p) = previous {
                if event.position < p {
                    return Err(CalcError::NonMonotonicPosition { index });
                }
            }
            previous = Some(event.position);
        }

        Ok(())
    }

    /// Validate a single numeric parameter for finiteness.
    pub fn validate_scalar<T: Float>(value: T, name: &str) -> Result<(), CalcError> {
        if !value.is_finite() {
            return Err(CalcError::InvalidNumericValue(format!(
                "{}={}",
                name,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the interval width: finite and strictly positive.
    pub fn validate_interval_width<T: Float>(width: T) -> Result<(), CalcError> {
        if !width.is_finite() || width <= T::zero() {
            return Err(CalcError::InvalidIntervalWidth(
                width.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a mod blend weight: finite and non-negative.
    pub fn validate_mod_weight<T: Float>(name: &str, weight: T) -> Result<(), CalcError> {
        if !weight.is_finite() || weight < T::zero() {
            return Err(CalcError::InvalidModWeight {
                name: name.to_string(),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the mod clamp range: finite, `low <= high`, and positive
    /// (mod values enter the blend as power bases).
    pub fn validate_clamp_range<T: Float>(low: T, high: T) -> Result<(), CalcError> {
        if !low.is_finite() || !high.is_finite() || low > high || low <= T::zero() {
            return Err(CalcError::InvalidClampRange {
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the published rating range: finite and `floor <= ceiling`.
    pub fn validate_rating_range<T: Float>(floor: T, ceiling: T) -> Result<(), CalcError> {
        if !floor.is_finite() || !ceiling.is_finite() || floor > ceiling {
            return Err(CalcError::InvalidRatingRange {
                floor: floor.to_f64().unwrap_or(f64::NAN),
                ceiling: ceiling.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the dependent-mod smoothing factor: in `(0, 1]`.
    pub fn validate_smoothing<T: Float>(alpha: T) -> Result<(), CalcError> {
        if !alpha.is_finite() || alpha <= T::zero() || alpha > T::one() {
            return Err(CalcError::InvalidSmoothing(
                alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), CalcError> {
        if let Some(parameter) = duplicate_param {
            return Err(CalcError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Registry Resolution
    // ========================================================================

    /// Validate that a mapped or weighted mod name is registered.
    pub fn validate_mod_name<T: FastFloat>(
        name: &str,
        registry: &ModRegistry<T>,
    ) -> Result<(), CalcError> {
        if registry.find(name).is_none() {
            return Err(CalcError::UnknownMod(name.to_string()));
        }
        Ok(())
    }
}
