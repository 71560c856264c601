/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Caller-owned cost matrix.
//!
//! [`CostMatrix`] is a dense row-major R×C grid. The solver only ever reads
//! it; every intermediate matrix is a fresh copy owned by the preprocessor or
//! the engine.

use alloc::vec::Vec;

use crate::cost::Cost;
use crate::error::{InputError, Result};

/// Dense R×C matrix of pairing costs.
///
/// Entries may be `+inf` to mark a forbidden pairing. NaN and `-inf` are
/// accepted here but rejected by [`crate::solve`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawCostMatrix<T>",
        bound(deserialize = "T: Cost + serde::Deserialize<'de>")
    )
)]
pub struct CostMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unvalidated wire form; deserialisation goes through [`CostMatrix::from_vec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Cost> TryFrom<RawCostMatrix<T>> for CostMatrix<T> {
    type Error = crate::error::SolveError;

    fn try_from(raw: RawCostMatrix<T>) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl<T: Cost> CostMatrix<T> {
    /// Build from a row-major buffer of `rows * cols` entries.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(InputError::EmptyDimension { rows, cols }.into());
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(InputError::LengthMismatch { expected, found: data.len() }.into());
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. All rows must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(InputError::EmptyDimension { rows: rows.len(), cols }.into());
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(InputError::RaggedRow { row, expected: cols, found: values.len() }.into());
            }
            data.extend_from_slice(values);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Build an R×C matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self::from_vec(rows, cols, data)
    }

    /// Number of rows (R).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (C).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.cols;
        self.data.iter().enumerate().map(move |(i, &v)| (i / cols, i % cols, v))
    }

    /// Row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
