//! # chartcalc — difficulty ratings for rhythm-game note charts
//!
//! A deterministic, allocation-light engine that turns a time-ordered
//! sequence of note events into per-category difficulty ratings. Given one
//! chart's timeline and a fixed column count, the engine segments the
//! timeline into fixed-width intervals, measures each interval with a
//! family of *pattern mods*, and blends the per-interval measurements into
//! one clamped rating per skill category.
//!
//! ## How rating works
//!
//! 1. **Segment**: the timeline is chunked into contiguous fixed-width
//!    intervals anchored at the first note. Each interval carries its note
//!    counts, chord rows, and per-column inter-press timing deltas.
//! 2. **Measure**: every registered pattern mod produces one scalar per
//!    interval. *Agnostic* mods see only the interval itself; *dependent*
//!    mods also thread an explicit rolling state across intervals, so they
//!    can react to trends (acceleration, accumulating fatigue).
//! 3. **Blend**: for each skill category, the relevant mods multiply into
//!    a per-interval scalar on top of a rate-derived base difficulty; the
//!    chart-level rating is the note-count-weighted mean of that series,
//!    inflated by its coefficient of variation and clamped into the
//!    published range.
//!
//! The numeric core leans on approximate fast arithmetic (`fast_pow`,
//! `fast_sqrt` via IEEE-754 bit manipulation) where relative ranking
//! matters more than absolute precision. Everything folds in a fixed
//! order: the same timeline and configuration produce bit-for-bit
//! identical ratings, run after run.
//!
//! ## Quick start
//!
//! ```rust
//! use chartcalc_rs::prelude::*;
//!
//! // An eighth-note stream alternating between two of four columns.
//! let events: Vec<NoteEvent<f32>> = (0..64usize)
//!     .map(|i| NoteEvent::tap(i as f32 * 0.25, i % 2))
//!     .collect();
//! let timeline = Timeline::new(&events, 4);
//!
//! let mut calc = Calc::new().build()?;
//! let result = calc.rate(&timeline)?;
//!
//! for rating in &result.ratings {
//!     println!("{}: {:.2}", rating.category.name(), rating.value);
//! }
//! # Result::<(), CalcError>::Ok(())
//! ```
//!
//! ## Tuning and diagnostics
//!
//! Every constant is builder-configurable, and the per-interval mod traces
//! can be returned for difficulty-over-time visualization:
//!
//! ```rust
//! use chartcalc_rs::prelude::*;
//!
//! let events: Vec<NoteEvent<f32>> = (0..32usize)
//!     .map(|i| NoteEvent::tap(i as f32 * 0.5, i % 4))
//!     .collect();
//! let timeline = Timeline::new(&events, 4);
//!
//! let mut calc = Calc::new()
//!     .interval_width(2.0)
//!     .reference_rate(5.0)
//!     .cv_weight(0.75)
//!     .mod_weight("balance", 0.5)
//!     .return_series()
//!     .build()?;
//!
//! let result = calc.rate(&timeline)?;
//! let balance = result.mod_series("balance").unwrap();
//! assert_eq!(balance.values.len(), result.intervals);
//! # Result::<(), CalcError>::Ok(())
//! ```
//!
//! ## Custom pattern mods
//!
//! The mod family is a name-keyed registry, not a closed list. A custom
//! mod is a plain function; registering it makes it addressable from
//! category mappings and weight overrides:
//!
//! ```rust
//! use chartcalc_rs::prelude::*;
//!
//! /// Fraction of presses landing on the single busiest column.
//! fn anchor_pressure(
//!     interval: &IntervalData<f32>,
//!     _state: &mut RollingState<f32>,
//!     params: &ModParams<f32>,
//! ) -> f32 {
//!     if interval.note_count == 0 {
//!         return 1.0;
//!     }
//!     let busiest = interval.column_counts.iter().copied().max().unwrap_or(0);
//!     let fraction = busiest as f32 / interval.note_count as f32;
//!     (1.0 + fraction).min(params.clamp_high)
//! }
//!
//! let mut calc = Calc::new()
//!     .register_mod(ModSpec {
//!         name: "anchor_pressure",
//!         func: anchor_pressure,
//!         dependent: false,
//!     })
//!     .categories(vec![(Technical, vec!["anchor_pressure", "gap_spread"])])
//!     .build()?;
//! # let events = vec![NoteEvent::tap(0.0_f32, 0)];
//! # let timeline = Timeline::new(&events, 4);
//! # calc.rate(&timeline)?;
//! # Result::<(), CalcError>::Ok(())
//! ```
//!
//! ## Input contract
//!
//! * Events ordered by non-decreasing position; equal positions form a
//!   chord row.
//! * Column indices inside `[0, column_count)`.
//! * Malformed timelines return [`prelude::CalcError`] — a defined
//!   "unratable" result. Degenerate-but-well-formed input (an empty chart)
//!   rates at the published floor instead.
//!
//! ## Concurrency
//!
//! One rating pass is a pure, synchronous computation: no I/O, no shared
//! state, no suspension points. Rate many charts in parallel by giving
//! each worker its own calculator (cloning is cheap); timelines are
//! borrowed read-only.
//!
//! ## Accuracy caveats
//!
//! `fast_pow` and `fast_sqrt` are approximate by design (a few percent and
//! well under one percent of relative error respectively). They shape
//! statistical measurements; do not repurpose them where exact arithmetic
//! is required.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data model and errors.
//
// Contains the note/timeline input records and the error enum.
mod primitives;

// Layer 2: Math - pure numeric functions.
//
// Contains the approximate fast primitives (fast_pow, fast_sqrt), the
// exact clamp/ratio/blend helpers, and the statistical aggregators.
mod math;

// Layer 3: Algorithms - chart-specific algorithms.
//
// Contains the interval segmenter and the pattern-mod family with its
// name-keyed registry.
mod algorithms;

// Layer 4: Evaluation - aggregation and blending.
//
// Contains the skill categories, the category-to-mod table, and the
// chart-level reduce with its clamps and non-finite guards.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, the pass executor, the reusable workspace,
// and the result records.
mod engine;

// High-level fluent API.
//
// Provides the `Calc` builder for configuring and running ratings.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard chartcalc prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use chartcalc_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CalcBuilder as Calc, CalcError, CalcResult, ChartCalc, IntervalData, ModFn, ModParams,
        ModSeries, RollingState, SkillRating, Timeline,
    };
    pub use crate::algorithms::mods::{ModRegistry, ModSpec};
    pub use crate::algorithms::segment::IntervalUnit::{self, Beats, Seconds};
    pub use crate::evaluation::blend::SkillCategory;
    pub use crate::evaluation::blend::SkillCategory::{Chordjack, Stamina, Stream, Technical};
    pub use crate::primitives::notes::NoteEvent;
    pub use crate::primitives::notes::NoteKind::{self, HoldHead, HoldTail, Tap};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and blending.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
