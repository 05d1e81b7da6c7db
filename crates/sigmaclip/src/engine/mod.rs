//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer runs the clipping process: it seeds the scratch buffer, drives
//! the convergence loop over the math layer's reducers, and defines the
//! validated configuration and output types.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bounds-convergence loop.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for clipping operations.
pub mod output;
