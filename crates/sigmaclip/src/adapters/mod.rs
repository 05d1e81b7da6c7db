//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine's bounds to the outputs callers ask for:
//!
//! - **Clipper**: bounds, outlier mask, in-place NaN marking, NaN-marked copy
//! - **Classify**: applying bounds back to the original, unfiltered sample
//! - **Rows**: independent clipping of every row of a flat 2-D array
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated clipper and its four calling conventions.
pub mod clipper;

/// Outlier classification against converged bounds.
pub mod classify;

/// Row-wise clipping with a shared scratch buffer.
pub mod rows;
