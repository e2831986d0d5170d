//! High-level API for chart difficulty rating.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the rating pipeline, and the built calculator
//! that rates timelines.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Every parameter is validated once, at `build()`; rating
//!   a timeline only re-validates the timeline itself.
//! * **Duplicate tracking**: Setting the same parameter twice is an error
//!   surfaced at `build()`, so configuration bugs do not silently win by
//!   last-write.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `Calc::new()` → chained setters →
//!   `.build()` → [`ChartCalc`] → `.rate(&timeline)` per chart.
//! * **One workspace per worker**: `rate` takes `&mut self` because the
//!   calculator owns its pass workspace. To rate charts in parallel, give
//!   each worker its own `ChartCalc` (cloning is cheap); no locking is
//!   needed because timelines are borrowed immutably.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::mods::{ModRegistry, ModSpec};
use crate::algorithms::segment::IntervalUnit;
use crate::engine::executor::{CalcConfig, CalcExecutor};
use crate::engine::validator::Validator;
use crate::engine::workspace::CalcWorkspace;
use crate::math::fast::FastFloat;

// Publicly re-exported types
pub use crate::algorithms::mods::{ModFn, ModParams, RollingState};
pub use crate::algorithms::segment::IntervalData;
pub use crate::engine::output::{CalcResult, ModSeries, SkillRating};
pub use crate::evaluation::blend::SkillCategory;
pub use crate::primitives::errors::CalcError;
pub use crate::primitives::notes::{NoteEvent, NoteKind, Timeline};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a chart difficulty calculator.
#[derive(Debug, Clone)]
pub struct CalcBuilder<T: FastFloat> {
    /// Nominal interval width.
    pub interval_width: Option<T>,

    /// Interpretation of the position axis.
    pub interval_unit: Option<IntervalUnit>,

    /// Reference press rate meaning "ordinary".
    pub reference_rate: Option<T>,

    /// Base difficulty exponent.
    pub base_exponent: Option<T>,

    /// Base difficulty scale.
    pub base_scale: Option<T>,

    /// Mod output clamp range.
    pub mod_clamp: Option<(T, T)>,

    /// Default mod shaping coefficient.
    pub mod_shape: Option<T>,

    /// Dependent-mod smoothing factor.
    pub smoothing: Option<T>,

    /// CV inflation weight.
    pub cv_weight: Option<T>,

    /// Published rating range.
    pub rating_range: Option<(T, T)>,

    /// Name-keyed blend weight overrides.
    pub mod_weights: Vec<(&'static str, T)>,

    /// Category-to-mod mapping override.
    pub categories: Option<Vec<(SkillCategory, Vec<&'static str>)>>,

    /// Whether to return per-interval mod series.
    pub return_series: Option<bool>,

    /// The mod registry rated against (standard family by default).
    pub registry: ModRegistry<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FastFloat> Default for CalcBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FastFloat> CalcBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            interval_width: None,
            interval_unit: None,
            reference_rate: None,
            base_exponent: None,
            base_scale: None,
            mod_clamp: None,
            mod_shape: None,
            smoothing: None,
            cv_weight: None,
            rating_range: None,
            mod_weights: Vec::new(),
            categories: None,
            return_series: None,
            registry: ModRegistry::standard(),
            duplicate_param: None,
        }
    }

    /// Set the nominal interval width.
    pub fn interval_width(mut self, width: T) -> Self {
        if self.interval_width.is_some() {
            self.duplicate_param = Some("interval_width");
        }
        self.interval_width = Some(width);
        self
    }

    /// Declare whether positions are seconds or beats.
    pub fn interval_unit(mut self, unit: IntervalUnit) -> Self {
        if self.interval_unit.is_some() {
            self.duplicate_param = Some("interval_unit");
        }
        self.interval_unit = Some(unit);
        self
    }

    /// Set the reference press rate.
    pub fn reference_rate(mut self, rate: T) -> Self {
        if self.reference_rate.is_some() {
            self.duplicate_param = Some("reference_rate");
        }
        self.reference_rate = Some(rate);
        self
    }

    /// Set the base difficulty exponent.
    pub fn base_exponent(mut self, exponent: T) -> Self {
        if self.base_exponent.is_some() {
            self.duplicate_param = Some("base_exponent");
        }
        self.base_exponent = Some(exponent);
        self
    }

    /// Set the base difficulty scale.
    pub fn base_scale(mut self, scale: T) -> Self {
        if self.base_scale.is_some() {
            self.duplicate_param = Some("base_scale");
        }
        self.base_scale = Some(scale);
        self
    }

    /// Set the clamp range applied to every mod output.
    pub fn mod_clamp(mut self, low: T, high: T) -> Self {
        if self.mod_clamp.is_some() {
            self.duplicate_param = Some("mod_clamp");
        }
        self.mod_clamp = Some((low, high));
        self
    }

    /// Set the default mod shaping coefficient.
    pub fn mod_shape(mut self, shape: T) -> Self {
        if self.mod_shape.is_some() {
            self.duplicate_param = Some("mod_shape");
        }
        self.mod_shape = Some(shape);
        self
    }

    /// Set the dependent-mod smoothing factor (in `(0, 1]`).
    pub fn smoothing(mut self, alpha: T) -> Self {
        if self.smoothing.is_some() {
            self.duplicate_param = Some("smoothing");
        }
        self.smoothing = Some(alpha);
        self
    }

    /// Set how strongly interval-to-interval variation inflates ratings.
    pub fn cv_weight(mut self, weight: T) -> Self {
        if self.cv_weight.is_some() {
            self.duplicate_param = Some("cv_weight");
        }
        self.cv_weight = Some(weight);
        self
    }

    /// Set the published rating range.
    pub fn rating_range(mut self, floor: T, ceiling: T) -> Self {
        if self.rating_range.is_some() {
            self.duplicate_param = Some("rating_range");
        }
        self.rating_range = Some((floor, ceiling));
        self
    }

    /// Override one mod's blend weight (weight 0 disables the mod).
    ///
    /// May be called once per mod name; a repeated name is a duplicate
    /// parameter.
    pub fn mod_weight(mut self, name: &'static str, weight: T) -> Self {
        if self.mod_weights.iter().any(|(n, _)| *n == name) {
            self.duplicate_param = Some("mod_weight");
        }
        self.mod_weights.push((name, weight));
        self
    }

    /// Replace the category-to-mod mapping.
    pub fn categories(mut self, categories: Vec<(SkillCategory, Vec<&'static str>)>) -> Self {
        if self.categories.is_some() {
            self.duplicate_param = Some("categories");
        }
        self.categories = Some(categories);
        self
    }

    /// Include per-interval mod series in results.
    pub fn return_series(mut self) -> Self {
        self.return_series = Some(true);
        self
    }

    /// Register a custom pattern mod (or replace a built-in by name).
    ///
    /// Registered mods become addressable from category mappings and
    /// weight overrides under their name.
    pub fn register_mod(mut self, spec: ModSpec<T>) -> Self {
        self.registry.register(spec);
        self
    }

    /// Validate the configuration and build the calculator.
    pub fn build(self) -> Result<ChartCalc<T>, CalcError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = CalcConfig::default();
        if let Some(width) = self.interval_width {
            config.interval_width = width;
        }
        if let Some(unit) = self.interval_unit {
            config.interval_unit = unit;
        }
        if let Some(rate) = self.reference_rate {
            config.reference_rate = rate;
        }
        if let Some(exponent) = self.base_exponent {
            config.base_exponent = exponent;
        }
        if let Some(scale) = self.base_scale {
            config.base_scale = scale;
        }
        if let Some((low, high)) = self.mod_clamp {
            config.mod_clamp_low = low;
            config.mod_clamp_high = high;
        }
        if let Some(shape) = self.mod_shape {
            config.mod_shape = shape;
        }
        if let Some(alpha) = self.smoothing {
            config.smoothing = alpha;
        }
        if let Some(weight) = self.cv_weight {
            config.cv_weight = weight;
        }
        if let Some((floor, ceiling)) = self.rating_range {
            config.rating_floor = floor;
            config.rating_ceiling = ceiling;
        }
        config.mod_weights = self.mod_weights;
        if let Some(categories) = self.categories {
            config.categories = categories;
        }
        if let Some(series) = self.return_series {
            config.return_series = series;
        }

        Validator::validate_interval_width(config.interval_width)?;
        Validator::validate_scalar(config.reference_rate, "reference_rate")?;
        Validator::validate_scalar(config.base_exponent, "base_exponent")?;
        Validator::validate_scalar(config.base_scale, "base_scale")?;
        Validator::validate_scalar(config.mod_shape, "mod_shape")?;
        Validator::validate_scalar(config.cv_weight, "cv_weight")?;
        Validator::validate_clamp_range(config.mod_clamp_low, config.mod_clamp_high)?;
        Validator::validate_rating_range(config.rating_floor, config.rating_ceiling)?;
        Validator::validate_smoothing(config.smoothing)?;
        for (name, weight) in &config.mod_weights {
            Validator::validate_mod_name(name, &self.registry)?;
            Validator::validate_mod_weight(name, *weight)?;
        }
        for (_, names) in &config.categories {
            for name in names {
                Validator::validate_mod_name(name, &self.registry)?;
            }
        }

        let mod_count = self.registry.len();
        Ok(ChartCalc {
            config,
            registry: self.registry,
            workspace: CalcWorkspace::new(0, mod_count),
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// A configured chart difficulty calculator.
///
/// Owns its configuration, mod registry, and pass workspace. Each call to
/// [`ChartCalc::rate`] is one full, strictly sequential analysis pass; the
/// rolling state is reset at the start of every pass, so a reused
/// calculator rates exactly like a fresh one.
#[derive(Debug, Clone)]
pub struct ChartCalc<T: FastFloat> {
    config: CalcConfig<T>,
    registry: ModRegistry<T>,
    workspace: CalcWorkspace<T>,
}

impl<T: FastFloat> ChartCalc<T> {
    /// Rate one timeline, producing one rating per configured category.
    ///
    /// Malformed timelines (out-of-range columns, decreasing positions,
    /// non-finite positions) return an error; degenerate-but-well-formed
    /// timelines (empty charts) rate at the published floor.
    pub fn rate(&mut self, timeline: &Timeline<'_, T>) -> Result<CalcResult<T>, CalcError> {
        CalcExecutor::rate(timeline, &self.config, &self.registry, &mut self.workspace)
    }

    /// The read-only configuration this calculator was built with.
    #[inline]
    pub fn config(&self) -> &CalcConfig<T> {
        &self.config
    }

    /// The mod registry this calculator rates against.
    #[inline]
    pub fn registry(&self) -> &ModRegistry<T> {
        &self.registry
    }
}
