/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Preprocessor: turns a caller's R×C cost matrix into the square, reduced
//! working matrix the engine consumes.
//!
//! # Steps
//!
//! 1. Validate entries (no NaN, no `-inf`, at least one finite value).
//! 2. Build a fresh N×N copy, N = max(R, C). Padding cells hold the largest
//!    finite entry of the original matrix.
//! 3. Replace `+inf` cells by a finite forbidden value large enough that any
//!    complete assignment touching one costs more than every complete
//!    assignment that does not.
//! 4. Subtract each row's minimum, then each column's minimum.
//!
//! After step 4 every row and every column holds at least one exact zero and
//! no cell is negative.

use alloc::vec;
use alloc::vec::Vec;

use crate::cost::Cost;
use crate::error::{InputError, Result};
use crate::matrix::CostMatrix;

/// Square, mutable working copy of the cost matrix.
///
/// Owned by the engine for the duration of one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Cost> WorkingMatrix<T> {
    /// Wrap an already square, non-negative row-major buffer without
    /// reducing it.
    ///
    /// Entry point for stepping an [`AssignmentEngine`](crate::AssignmentEngine)
    /// by hand. Every row and column should already hold a zero; [`prepare`]
    /// is the checked route from a [`CostMatrix`].
    pub fn from_square(size: usize, data: Vec<T>) -> Result<Self> {
        if size == 0 {
            return Err(InputError::EmptyDimension { rows: 0, cols: 0 }.into());
        }
        if data.len() != size * size {
            return Err(InputError::LengthMismatch { expected: size * size, found: data.len() }.into());
        }
        Ok(Self { size, data })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`. Panics outside the matrix.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.size + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.size + col]
    }

    /// Row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn reduce_rows(&mut self) {
        for row in self.data.chunks_mut(self.size) {
            let min = min_of(row.iter().copied());
            for x in row.iter_mut() {
                *x = *x - min;
            }
        }
    }

    fn reduce_cols(&mut self) {
        let n = self.size;
        for col in 0..n {
            let min = min_of((0..n).map(|row| self.data[row * n + col]));
            for row in 0..n {
                let x = &mut self.data[row * n + col];
                *x = *x - min;
            }
        }
    }
}

/// Smallest value of a non-empty iterator.
fn min_of<T: Cost>(mut values: impl Iterator<Item = T>) -> T {
    let first = values.next().unwrap_or(T::ZERO);
    values.fold(first, |acc, v| if v < acc { v } else { acc })
}

/// Finite extremes of a validated matrix.
struct FiniteRange<T> {
    lo: T,
    hi: T,
    has_forbidden: bool,
}

/// Check every entry and return the finite range.
fn validate<T: Cost>(cost: &CostMatrix<T>) -> Result<FiniteRange<T>> {
    let mut bounds: Option<(T, T)> = None;
    let mut has_forbidden = false;
    for (row, col, value) in cost.cells() {
        if value.is_nan() {
            return Err(InputError::NotANumber { row, col }.into());
        }
        if !value.is_finite() {
            if value.is_pos_infinity() {
                has_forbidden = true;
                continue;
            }
            return Err(InputError::NegativeInfinity { row, col }.into());
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((lo, hi)) => (
                if value < lo { value } else { lo },
                if value > hi { value } else { hi },
            ),
        });
    }
    let (lo, hi) = bounds.ok_or(InputError::NoFiniteEntry)?;
    // Row reduction subtracts across the whole range.
    if !(hi - lo).is_finite() {
        return Err(InputError::CostRangeOverflow.into());
    }
    Ok(FiniteRange { lo, hi, has_forbidden })
}

/// Finite stand-in for `+inf` cells.
///
/// A complete assignment has N cells. Without forbidden cells it costs at most
/// `N * hi`; with at least one it costs at least `forbidden + (N - 1) * lo`.
/// Choosing `forbidden = hi + N * (hi - lo) + max(|hi|, 1)` keeps the second
/// strictly above the first.
fn forbidden_value<T: Cost>(range: &FiniteRange<T>, n: usize) -> Result<T> {
    let margin = {
        let m = range.hi.magnitude();
        if m < T::ONE {
            T::ONE
        } else {
            m
        }
    };
    let value = range.hi + T::from_usize(n) * (range.hi - range.lo) + margin;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::CostRangeOverflow.into())
    }
}

/// Reject ranges whose entries could leave the finite range while the engine
/// runs.
///
/// Prepared entries lie in `[0, top - lo]`. Step 5 moves row and column
/// potentials by at most `N` such spreads each, so no entry ever exceeds
/// `(2N + 1) * (top - lo)`.
fn check_headroom<T: Cost>(top: T, lo: T, n: usize) -> Result<()> {
    let bound = T::from_usize(2 * n + 1) * (top - lo);
    if bound.is_finite() {
        Ok(())
    } else {
        Err(InputError::CostRangeOverflow.into())
    }
}

/// Build the reduced N×N working matrix for `cost`.
///
/// The caller's matrix is only read.
pub fn prepare<T: Cost>(cost: &CostMatrix<T>) -> Result<WorkingMatrix<T>> {
    let range = validate(cost)?;
    let (rows, cols) = (cost.rows(), cost.cols());
    let n = rows.max(cols);

    let mut working = WorkingMatrix { size: n, data: vec![range.hi; n * n] };
    if range.has_forbidden {
        let forbidden = forbidden_value(&range, n)?;
        check_headroom(forbidden, range.lo, n)?;
        tracing::trace!(forbidden = ?forbidden, "replacing infinite costs");
        for (row, col, value) in cost.cells() {
            *working.at_mut(row, col) = if value.is_pos_infinity() { forbidden } else { value };
        }
    } else {
        check_headroom(range.hi, range.lo, n)?;
        for (row, col, value) in cost.cells() {
            *working.at_mut(row, col) = value;
        }
    }

    working.reduce_rows();
    working.reduce_cols();

    tracing::trace!(rows, cols, size = n, "cost matrix prepared");
    Ok(working)
}
