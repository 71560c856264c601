/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Extractor: reads the optimal assignment off a finished engine.
//!
//! Padding rows (index ≥ R) and padding columns (index ≥ C) are dropped. A
//! star that landed in padding simply leaves its real row or column
//! unassigned, which is what the padding stood for.

use alloc::vec::Vec;

use crate::cost::Cost;
use crate::engine::Mask;
use crate::error::{InvariantViolation, Result};
use crate::matrix::CostMatrix;

/// Optimal pairing of rows to columns, ordered by row index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    /// `(row, col)` pairs, ascending by row.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Number of pairs, `min(R, C)` for a solved matrix.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` if no pair was assigned.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs.
    pub fn iter(&self) -> core::slice::Iter<'_, (usize, usize)> {
        self.pairs.iter()
    }

    /// Column assigned to `row`, if any.
    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&row, |&(r, _)| r)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    /// Row assigned to `col`, if any.
    pub fn row_for_col(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, c)| c == col).map(|&(r, _)| r)
    }

    /// Sum of the original costs of every pair.
    ///
    /// Infinite when any pair sits on a forbidden cell.
    pub fn total_cost<T: Cost>(&self, cost: &CostMatrix<T>) -> T {
        self.pairs
            .iter()
            .filter_map(|&(r, c)| cost.get(r, c))
            .fold(T::ZERO, |acc, v| acc + v)
    }

    /// Pairs whose original cost is `+inf`.
    ///
    /// Non-empty only when no finite complete assignment exists.
    pub fn forbidden_pairs<'a, T: Cost>(
        &'a self,
        cost: &'a CostMatrix<T>,
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.pairs
            .iter()
            .copied()
            .filter(move |&(r, c)| cost.get(r, c).is_some_and(|v| v.is_pos_infinity()))
    }

    /// Consume into the raw pair list.
    pub fn into_pairs(self) -> Vec<(usize, usize)> {
        self.pairs
    }
}

impl IntoIterator for Assignment {
    type Item = (usize, usize);
    type IntoIter = alloc::vec::IntoIter<(usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a (usize, usize);
    type IntoIter = core::slice::Iter<'a, (usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Collect the stars inside the original `rows × cols` region.
///
/// Stars come out row-major, so the result is already ordered by row.
pub fn extract(mask: &Mask, rows: usize, cols: usize) -> Result<Assignment> {
    let pairs: Vec<(usize, usize)> = mask
        .stars()
        .filter(|&(r, c)| r < rows && c < cols)
        .collect();

    let expected = rows.min(cols);
    if pairs.len() != expected {
        return Err(InvariantViolation::IncompleteAssignment { expected, found: pairs.len() }.into());
    }
    Ok(Assignment { pairs })
}
