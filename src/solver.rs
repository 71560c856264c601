/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Solver entry point: preprocessor, engine and extractor run in sequence.

use crate::cost::Cost;
use crate::engine::{default_step_budget, AssignmentEngine};
use crate::error::Result;
use crate::extract::{extract, Assignment};
use crate::matrix::CostMatrix;
use crate::preprocess::prepare;

/// Tuning knobs for [`Munkres`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Maximum engine transitions before the run is declared broken.
    /// Default: `None`, which uses [`default_step_budget`] for the padded size.
    pub max_steps: Option<u64>,
}

impl SolverConfig {
    /// Budget for a working matrix of side `size`.
    pub fn step_budget(&self, size: usize) -> u64 {
        self.max_steps.unwrap_or_else(|| default_step_budget(size))
    }
}

/// Hungarian-algorithm assignment solver.
///
/// Holds configuration only; every [`Munkres::solve`] call builds and drops
/// its own working state, so one solver can be shared across threads.
///
/// # Example
///
/// ```
/// use munkres_core::{CostMatrix, Munkres};
///
/// let cost = CostMatrix::from_rows(&[[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]]).unwrap();
/// let assignment = Munkres::default().solve(&cost).unwrap();
/// assert_eq!(assignment.pairs(), &[(0, 1), (1, 0), (2, 2)]);
/// assert_eq!(assignment.total_cost(&cost), 5.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Munkres {
    /// Active configuration.
    pub config: SolverConfig,
}

impl Munkres {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find a minimum-cost assignment for `cost`.
    ///
    /// Returns exactly `min(R, C)` pairs ordered by row. `+inf` cells are
    /// chosen only when no finite complete assignment exists; see
    /// [`Assignment::forbidden_pairs`].
    pub fn solve<T: Cost>(&self, cost: &CostMatrix<T>) -> Result<Assignment> {
        let span = tracing::debug_span!("munkres.solve", rows = cost.rows(), cols = cost.cols());
        let _guard = span.enter();

        let working = prepare(cost)?;
        let budget = self.config.step_budget(working.size());

        let mut engine = AssignmentEngine::new(working);
        engine.run(budget)?;

        extract(&engine.into_mask(), cost.rows(), cost.cols())
    }
}

/// Solve `cost` with the default configuration.
pub fn solve<T: Cost>(cost: &CostMatrix<T>) -> Result<Assignment> {
    Munkres::default().solve(cost)
}
