//! Configuration table and pass orchestration.
//!
//! ## Purpose
//!
//! This module provides the read-only configuration record and the
//! executor that runs one full analysis pass: validate, segment, evaluate
//! pattern mods interval-by-interval, blend per category, clamp, and
//! assemble the result.
//!
//! ## Design notes
//!
//! * **Strictly sequential pass**: Dependent mods require interval-ordered
//!   state updates, so the segment → mods → blend sequence never reorders.
//!   This sequential pass is the unit of work handed to a worker; multiple
//!   charts parallelize with one workspace per worker and no locking.
//! * **Deterministic**: Configuration tables are ordered vectors, mods
//!   evaluate in registry order, and every reduction folds in interval
//!   order. The same timeline and configuration produce bit-identical
//!   ratings.
//! * **Pure**: Nothing here performs I/O or touches global state; all
//!   mutability is confined to the caller's workspace.
//!
//! ## Key concepts
//!
//! * **Constant table**: [`CalcConfig`] is built once, validated once, and
//!   treated as read-only for the lifetime of all passes.
//! * **Non-finite boundary**: Mod outputs and interval scalars are
//!   sanitized before aggregation; a NaN escaping a mod becomes the
//!   neutral value, never a NaN rating.
//!
//! ## Invariants
//!
//! * Every returned rating is finite and inside the published range.
//! * An empty timeline yields the floor rating for every category.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (the builder does, see
//!   `api`); it does validate the per-call timeline.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::mods::{ModParams, ModRegistry};
use crate::algorithms::segment::{IntervalUnit, Segmenter};
use crate::engine::output::{CalcResult, ModSeries, SkillRating};
use crate::engine::validator::Validator;
use crate::engine::workspace::CalcWorkspace;
use crate::evaluation::blend::{
    apply_mod, base_difficulty, reduce_chart, sanitize, SkillCategory,
};
use crate::math::fast::FastFloat;
use crate::primitives::errors::CalcError;
use crate::primitives::notes::Timeline;

// ============================================================================
// Configuration
// ============================================================================

/// The static table of tunable constants for one calculator.
///
/// Built once (normally through the fluent builder), validated once, and
/// read-only afterwards; no configuration change can affect an analysis
/// pass that has already started.
#[derive(Debug, Clone)]
pub struct CalcConfig<T> {
    /// Nominal interval width on the position axis.
    pub interval_width: T,
    /// Interpretation of the position axis (documentation only).
    pub interval_unit: IntervalUnit,
    /// Press rate considered "ordinary" (presses per position unit).
    pub reference_rate: T,
    /// Exponent shaping the per-interval base difficulty.
    pub base_exponent: T,
    /// Scale mapping shaped base difficulty onto the rating magnitude.
    pub base_scale: T,
    /// Lower clamp bound for every mod output.
    pub mod_clamp_low: T,
    /// Upper clamp bound for every mod output.
    pub mod_clamp_high: T,
    /// Default shaping coefficient handed to mods.
    pub mod_shape: T,
    /// Smoothing factor in `(0, 1]` for dependent-mod accumulators.
    pub smoothing: T,
    /// How strongly interval-to-interval variation inflates the rating.
    pub cv_weight: T,
    /// Published minimum rating; also the empty-chart rating.
    pub rating_floor: T,
    /// Published maximum rating.
    pub rating_ceiling: T,
    /// Name-keyed blend weight overrides; unlisted mods weigh 1.
    pub mod_weights: Vec<(&'static str, T)>,
    /// Category-to-mod mapping, in rating output order.
    pub categories: Vec<(SkillCategory, Vec<&'static str>)>,
    /// Whether to assemble per-interval mod series in the result.
    pub return_series: bool,
}

impl<T: FastFloat> Default for CalcConfig<T> {
    fn default() -> Self {
        let f = |v: f64| T::from(v).unwrap();
        Self {
            interval_width: f(0.5),
            interval_unit: IntervalUnit::Seconds,
            reference_rate: f(4.0),
            base_exponent: f(0.9),
            base_scale: f(7.0),
            mod_clamp_low: f(0.5),
            mod_clamp_high: f(1.5),
            mod_shape: f(0.9),
            smoothing: f(0.25),
            cv_weight: f(0.5),
            rating_floor: f(1.0),
            rating_ceiling: f(40.0),
            mod_weights: Vec::new(),
            categories: SkillCategory::ALL
                .iter()
                .map(|c| (*c, c.default_mods().to_vec()))
                .collect(),
            return_series: false,
        }
    }
}

impl<T: FastFloat> CalcConfig<T> {
    /// The blend weight for a mod: its override, or 1.
    pub fn weight_for(&self, name: &str) -> T {
        self.mod_weights
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, w)| *w)
            .unwrap_or_else(T::one)
    }

    /// The per-invocation tunables handed to every mod.
    pub fn mod_params(&self) -> ModParams<T> {
        ModParams {
            clamp_low: self.mod_clamp_low,
            clamp_high: self.mod_clamp_high,
            reference_rate: self.reference_rate,
            shape: self.mod_shape,
            smoothing: self.smoothing,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates one full analysis pass.
pub struct CalcExecutor;

impl CalcExecutor {
    /// Rate one timeline under the given configuration and registry.
    ///
    /// Validates the timeline, then runs the sequential
    /// segment → mods → blend pipeline against the caller's workspace.
    /// Degenerate inputs (an empty timeline) are not errors; they rate at
    /// the floor for every category.
    pub fn rate<T: FastFloat>(
        timeline: &Timeline<'_, T>,
        config: &CalcConfig<T>,
        registry: &ModRegistry<T>,
        workspace: &mut CalcWorkspace<T>,
    ) -> Result<CalcResult<T>, CalcError> {
        Validator::validate_timeline(timeline)?;
        workspace.reset(timeline.column_count(), registry.len());

        // Segment and evaluate every registered mod per interval, in
        // interval order. Dependent state advances here exactly once per
        // interval regardless of which categories use the mod.
        let params = config.mod_params();
        let mut segmenter = Segmenter::new(timeline, config.interval_width);
        let interval_count = segmenter.interval_count();
        while segmenter.next_into(&mut workspace.interval) {
            workspace.note_counts.push(workspace.interval.note_count);
            for (series, spec) in workspace
                .mod_values
                .iter_mut()
                .zip(registry.entries().iter())
            {
                let raw = (spec.func)(&workspace.interval, &mut workspace.rolling, &params);
                series.push(sanitize(raw));
            }
        }

        let total_notes: usize = workspace.note_counts.iter().sum();

        // Blend per category: base difficulty times the category's mods,
        // reduced across the chart by the note-weighted mean with CV
        // inflation.
        let mut ratings = Vec::with_capacity(config.categories.len());
        for (category, mod_names) in &config.categories {
            workspace.scalars.clear();
            for k in 0..workspace.note_counts.len() {
                let rate = T::from(workspace.note_counts[k]).unwrap() / config.interval_width;
                let mut scalar = base_difficulty(rate, config.base_exponent, config.base_scale);
                if scalar > T::zero() {
                    for name in mod_names {
                        let idx = registry
                            .index_of(name)
                            .ok_or_else(|| CalcError::UnknownMod(name.to_string()))?;
                        let weight = config.weight_for(name);
                        scalar = apply_mod(scalar, workspace.mod_values[idx][k], weight);
                    }
                }
                // Zero (an empty interval) is legitimate here; non-finite
                // is not and becomes the neutral value.
                workspace.scalars.push(sanitize(scalar));
            }
            let value = reduce_chart(
                &workspace.scalars,
                &workspace.note_counts,
                config.cv_weight,
                config.rating_floor,
                config.rating_ceiling,
            );
            ratings.push(SkillRating {
                category: *category,
                value,
            });
        }

        let series = if config.return_series {
            Some(
                registry
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, spec)| ModSeries {
                        name: spec.name,
                        values: workspace.mod_values[i].clone(),
                    })
                    .collect(),
            )
        } else {
            None
        };

        Ok(CalcResult {
            ratings,
            intervals: interval_count,
            notes: total_notes,
            series,
        })
    }
}
