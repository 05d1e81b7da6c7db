//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure statistical functions used by the engine:
//! - Selection-based median
//! - Mean and spread estimators (standard deviation, MAD)
//! - The pluggable center/dispersion function types
//!
//! These are reusable building blocks with no knowledge of the clipping loop.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Selection-based median.
pub mod median;

/// Mean and spread estimators.
pub mod dispersion;

/// Center and dispersion function selection.
pub mod functions;
