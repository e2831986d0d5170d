//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric functions used throughout the
//! rating pipeline:
//! - Approximate fast primitives (`fast_pow`, `fast_sqrt`) and exact
//!   ordered-ratio/clamp/blend helpers
//! - Statistical aggregators (sum, mean, coefficient of variation)
//!
//! These are reusable building blocks with no chart-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Approximate fast primitives and exact helper functions.
pub mod fast;

/// Statistical aggregators over per-interval scalars.
pub mod stats;
