/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Python FFI bindings via PyO3.
//!
//! Exposes the solver to Python over `float` matrices given as nested lists.
//! For other element types or step-by-step engine access, use the Rust API
//! directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import math
//! from munkres_core import Munkres, solve, total_cost
//!
//! cost = [[4.0, 1.0, 3.0],
//!         [2.0, 0.0, 5.0],
//!         [3.0, 2.0, math.inf]]
//! pairs = solve(cost)              # [(0, 1), (1, 0), (2, 2)] or another optimum
//! print(total_cost(cost, pairs))
//!
//! solver = Munkres(max_steps=10_000)
//! solver.solve(cost)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::solver::{Munkres as RustMunkres, SolverConfig};

fn to_py_err(err: SolveError) -> PyErr {
    match err {
        SolveError::InvalidInput(e) => PyValueError::new_err(e.to_string()),
        SolveError::InternalInvariantViolation(e) => PyRuntimeError::new_err(e.to_string()),
    }
}

fn to_matrix(cost: &[Vec<f64>]) -> PyResult<CostMatrix<f64>> {
    CostMatrix::from_rows(cost).map_err(to_py_err)
}

// ── Munkres ───────────────────────────────────────────────────────────────────

/// Hungarian-algorithm assignment solver.
///
/// Args:
///     max_steps: optional cap on engine transitions (default: derived from size)
#[pyclass(name = "Munkres")]
#[derive(Clone)]
pub struct PyMunkres {
    inner: RustMunkres,
}

#[pymethods]
impl PyMunkres {
    /// Create a solver.
    #[new]
    #[pyo3(signature = (max_steps=None))]
    pub fn new(max_steps: Option<u64>) -> Self {
        Self { inner: RustMunkres::new(SolverConfig { max_steps }) }
    }

    /// Configured step cap, or None for the size-derived default.
    #[getter]
    pub fn max_steps(&self) -> Option<u64> {
        self.inner.config.max_steps
    }

    /// Solve a cost matrix given as a list of equal-length rows.
    ///
    /// Returns:
    ///     list of (row, col) tuples ordered by row, length min(R, C)
    ///
    /// Raises:
    ///     ValueError: empty or ragged matrix, NaN entry, or no finite entry
    ///     RuntimeError: internal invariant violation
    pub fn solve(&self, cost: Vec<Vec<f64>>) -> PyResult<Vec<(usize, usize)>> {
        let matrix = to_matrix(&cost)?;
        let assignment = self.inner.solve(&matrix).map_err(to_py_err)?;
        Ok(assignment.into_pairs())
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        match self.inner.config.max_steps {
            Some(n) => format!("Munkres(max_steps={n})"),
            None => "Munkres()".to_string(),
        }
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Solve a cost matrix with the default configuration.
#[pyfunction]
pub fn solve(cost: Vec<Vec<f64>>) -> PyResult<Vec<(usize, usize)>> {
    PyMunkres::new(None).solve(cost)
}

/// Sum of `cost[row][col]` over `pairs`. Infinite if any pair is forbidden.
#[pyfunction]
pub fn total_cost(cost: Vec<Vec<f64>>, pairs: Vec<(usize, usize)>) -> PyResult<f64> {
    let matrix = to_matrix(&cost)?;
    pairs.iter().try_fold(0.0, |acc, &(r, c)| {
        matrix
            .get(r, c)
            .map(|v| acc + v)
            .ok_or_else(|| PyValueError::new_err(format!("pair ({r}, {c}) is outside the matrix")))
    })
}

// ── Module entry point ────────────────────────────────────────────────────────

/// munkres_core: Hungarian-algorithm assignment solver bindings.
#[pymodule]
pub fn munkres_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMunkres>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add_function(wrap_pyfunction!(total_cost, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
