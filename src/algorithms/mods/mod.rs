//! Pattern-mod functions and the name-keyed registry.
//!
//! ## Purpose
//!
//! This module defines the pattern-mod machinery: the explicit rolling
//! state threaded through dependent mods, the per-mod tunables, the mod
//! function signature, and the ordered registry the engine evaluates.
//!
//! ## Design notes
//!
//! * **Pure functions plus explicit state**: Every mod is a plain `fn` of
//!   the interval, the rolling state, and its resolved tunables. There is
//!   no hidden global; a pass owns exactly one [`RollingState`].
//! * **Registry, not a hard-coded list**: The built-in family installs via
//!   [`ModRegistry::standard`]; callers can append or replace entries by
//!   name. Evaluation order is registry order, which fixes the floating
//!   point reduction order and keeps results deterministic.
//! * **Dependent mods are order-sensitive**: A dependent mod updates its
//!   accumulator exactly once per interval, in interval order. Reordering
//!   intervals changes results; this is a streaming algorithm, not a
//!   commutative reduction.
//!
//! ## Key concepts
//!
//! * **Agnostic mod**: A function of the interval's own contents only.
//! * **Dependent mod**: Additionally reads and updates [`RollingState`],
//!   so its output depends on trends across prior intervals.
//! * **Neutral substitution**: Insufficient data (empty interval, too few
//!   gaps, a column with no presses) produces the neutral value `1.0`,
//!   never an error and never a division by zero.
//!
//! ## Invariants
//!
//! * Every mod output is finite and inside its configured clamp range.
//!
//! ## Non-goals
//!
//! * This module does not combine mod values across intervals (see
//!   `evaluation::blend`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::segment::IntervalData;
use crate::math::fast::FastFloat;

// Built-in mod families
mod agnostic;
mod dependent;

pub use agnostic::{balance, chord_pressure, density, gap_spread};
pub use dependent::{fatigue, surge};

// ============================================================================
// Rolling State
// ============================================================================

/// Cross-interval accumulator for dependent mods.
///
/// One instance lives in the pass workspace; it is reset at the start of
/// each chart's analysis and discarded at the end. Each dependent mod owns
/// a field and updates it exactly once per interval.
#[derive(Debug, Clone)]
pub struct RollingState<T> {
    /// Exponentially weighted mean inter-press gap (used by `surge`).
    pub rolling_gap: Option<T>,
    /// Accumulated fatigue level, `>= 0` (used by `fatigue`).
    pub fatigue: T,
}

impl<T: FastFloat> RollingState<T> {
    /// Fresh state for a new pass.
    pub fn new() -> Self {
        Self {
            rolling_gap: None,
            fatigue: T::zero(),
        }
    }

    /// Reset to the fresh-pass state.
    pub fn reset(&mut self) {
        self.rolling_gap = None;
        self.fatigue = T::zero();
    }
}

impl<T: FastFloat> Default for RollingState<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Mod Parameters
// ============================================================================

/// Tunables resolved from the configuration for one mod invocation.
#[derive(Debug, Clone, Copy)]
pub struct ModParams<T> {
    /// Lower clamp bound for the mod's output.
    pub clamp_low: T,
    /// Upper clamp bound for the mod's output.
    pub clamp_high: T,
    /// Reference press rate (presses per position unit) meaning "ordinary".
    pub reference_rate: T,
    /// Shaping coefficient; its meaning is per-mod (exponent for `density`
    /// and `surge`, linear gain for `gap_spread` and `fatigue`).
    pub shape: T,
    /// Smoothing factor in `(0, 1]` for dependent-mod accumulators.
    pub smoothing: T,
}

// ============================================================================
// Mod Function Type and Registry
// ============================================================================

/// Signature shared by every pattern mod.
///
/// A mod is a named pure function of one interval plus explicit rolling
/// state; agnostic mods simply ignore the state.
pub type ModFn<T> = fn(&IntervalData<T>, &mut RollingState<T>, &ModParams<T>) -> T;

/// One registered pattern mod.
#[derive(Debug, Clone, Copy)]
pub struct ModSpec<T> {
    /// Stable name, used by category mappings and weight overrides.
    pub name: &'static str,
    /// The mod function.
    pub func: ModFn<T>,
    /// Whether the mod reads and updates [`RollingState`].
    pub dependent: bool,
}

/// Ordered, name-keyed collection of pattern mods.
///
/// Evaluation order is insertion order. Registering a name that already
/// exists replaces the earlier entry in place, keeping its position.
#[derive(Debug, Clone)]
pub struct ModRegistry<T> {
    entries: Vec<ModSpec<T>>,
}

impl<T: FastFloat> ModRegistry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in mod family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(ModSpec {
                name: "balance",
                func: balance,
                dependent: false,
            })
            .register(ModSpec {
                name: "density",
                func: density,
                dependent: false,
            })
            .register(ModSpec {
                name: "gap_spread",
                func: gap_spread,
                dependent: false,
            })
            .register(ModSpec {
                name: "chord_pressure",
                func: chord_pressure,
                dependent: false,
            })
            .register(ModSpec {
                name: "surge",
                func: surge,
                dependent: true,
            })
            .register(ModSpec {
                name: "fatigue",
                func: fatigue,
                dependent: true,
            });
        registry
    }

    /// Append a mod, or replace an existing entry with the same name in place.
    pub fn register(&mut self, spec: ModSpec<T>) -> &mut Self {
        match self.entries.iter_mut().find(|e| e.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.entries.push(spec),
        }
        self
    }

    /// Look up a mod by name.
    pub fn find(&self, name: &str) -> Option<&ModSpec<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Position of a mod in evaluation order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// The registered mods in evaluation order.
    #[inline]
    pub fn entries(&self) -> &[ModSpec<T>] {
        &self.entries
    }

    /// Number of registered mods.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: FastFloat> Default for ModRegistry<T> {
    fn default() -> Self {
        Self::standard()
    }
}
