//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the chart-specific algorithms:
//! - The interval segmenter, which chunks a timeline into fixed-width
//!   windows and derives per-column timing deltas
//! - The pattern-mod family and its registry
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Interval segmentation of a note timeline.
pub mod segment;

/// Pattern-mod functions and the name-keyed registry.
pub mod mods;
