/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Error types for the assignment solver.
//!
//! Two families: [`InputError`] for malformed cost matrices, detected before
//! the engine starts, and [`InvariantViolation`] for conditions that a correct
//! engine never reaches. Neither is retried; both surface directly from
//! [`crate::solve`].

use thiserror::Error;

/// Result type for solver operations.
pub type Result<T> = core::result::Result<T, SolveError>;

/// Top-level solver error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The cost matrix violates a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The engine reached a state that should be impossible for valid input.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(#[from] InvariantViolation),
}

impl SolveError {
    /// `true` for [`SolveError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Precondition violations in a caller-supplied cost matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A matrix dimension is zero.
    #[error("matrix must have at least one row and one column, got {rows}x{cols}")]
    EmptyDimension {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },

    /// Nested rows of differing length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },

    /// A flat buffer whose length is not `rows * cols`.
    #[error("buffer holds {found} entries, expected {expected}")]
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// A NaN cost.
    #[error("entry ({row}, {col}) is NaN")]
    NotANumber {
        /// Row of the NaN entry.
        row: usize,
        /// Column of the NaN entry.
        col: usize,
    },

    /// A negative infinite cost, which would make every minimum unbounded.
    #[error("entry ({row}, {col}) is negative infinity")]
    NegativeInfinity {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// Every entry is +infinity; no pairing is representable.
    #[error("matrix has no finite entry")]
    NoFiniteEntry,

    /// The finite cost range is so wide that no finite value can dominate it.
    #[error("finite costs span too wide a range to represent forbidden entries")]
    CostRangeOverflow,
}

/// Engine states that are unreachable from correctly preprocessed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// The state machine did not reach its terminal state within the budget.
    #[error("no optimal assignment after {steps} steps")]
    StepBudgetExhausted {
        /// Transitions performed before giving up.
        steps: u64,
    },

    /// Augment was entered without a primed zero to start from.
    #[error("augmenting step has no saved zero")]
    MissingSavedZero,

    /// Adjust was entered with every row or every column covered.
    #[error("no uncovered cell left to adjust")]
    NoUncoveredCell,

    /// Adjust computed a step that is zero, negative or not finite.
    #[error("adjustment value {value} is not a positive finite number")]
    NonFiniteAdjustment {
        /// The offending minimum, widened to `f64`.
        value: f64,
    },

    /// The extracted assignment does not cover the smaller dimension.
    #[error("assignment has {found} pairs, expected {expected}")]
    IncompleteAssignment {
        /// `min(rows, cols)`.
        expected: usize,
        /// Pairs actually starred.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_input_error_converts_into_solve_error() {
        let err: SolveError = InputError::NoFiniteEntry.into();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "invalid input: matrix has no finite entry");
    }

    #[test]
    fn test_invariant_violation_is_not_invalid_input() {
        let err: SolveError = InvariantViolation::StepBudgetExhausted { steps: 12 }.into();
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "internal invariant violation: no optimal assignment after 12 steps"
        );
    }
}
