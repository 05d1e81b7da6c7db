//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns the engine's output into summary numbers for callers who
//! want robust statistics rather than a clipped array.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sigma-clipped summary statistics.
pub mod stats;
