//! Row-wise clipping of a flat 2-D array.
//!
//! ## Purpose
//!
//! Image rows and batches of time series are usually stored as one flat
//! slice. This adapter clips every `row_len` chunk independently, reusing a
//! single scratch buffer for all of them.
//!
//! ## Design notes
//!
//! * **Sequential**: Rows are processed one after another on the calling thread.
//! * **One buffer**: The scratch region is sized to one row and reused.
//!
//! ## Invariants
//!
//! * `row_len > 0` and `data.len()` is a multiple of `row_len`.
//! * Bounds are returned in row order, one per row.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::classify::nan_outliers;
use crate::adapters::clipper::SigmaClipper;
use crate::engine::output::ClipBounds;
use crate::engine::validator::Validator;
use crate::primitives::buffer::ClipBuffer;
use crate::primitives::errors::SigmaClipError;

impl<T: Float> SigmaClipper<T> {
    /// Clip each `row_len`-long row of `data` in place, independently.
    ///
    /// `mask`, when given, is parallel to the whole of `data`. Pass a
    /// `ClipBuffer` to keep its allocation across calls.
    pub fn clip_rows_in_place(
        &self,
        data: &mut [T],
        row_len: usize,
        mask: Option<&[bool]>,
        buffer: Option<&mut ClipBuffer<T>>,
    ) -> Result<Vec<ClipBounds<T>>, SigmaClipError> {
        Validator::validate_row_len(data.len(), row_len)?;
        Validator::validate_mask(data.len(), mask)?;

        let mut owned = ClipBuffer::new();
        let buffer = match buffer {
            Some(buffer) => buffer,
            None => &mut owned,
        };
        let scratch = buffer.prepare(row_len);

        let mut results = Vec::with_capacity(data.len() / row_len);
        let mut replaced = 0;
        for (i, row) in data.chunks_exact_mut(row_len).enumerate() {
            let row_mask = mask.map(|m| &m[i * row_len..(i + 1) * row_len]);
            let bounds = self.execute(row, row_mask, scratch);
            replaced += nan_outliers(row, &bounds);
            results.push(bounds);
        }

        debug!(
            "clip_rows_in_place: {} rows of {}, {} elements set to NaN",
            results.len(),
            row_len,
            replaced
        );

        Ok(results)
    }
}
