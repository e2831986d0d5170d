//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer reduces per-interval, per-mod scalars into the final skill
//! ratings: the category-to-mod mapping, the per-interval combine, and the
//! chart-level statistic with its clamps and non-finite guards.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Skill categories and the aggregation/blend stage.
pub mod blend;
