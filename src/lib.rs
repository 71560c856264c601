/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! # munkres-core
//!
//! Rectangular linear assignment via the Hungarian (Kuhn-Munkres) algorithm.
//!
//! Given an R×C matrix of costs, find the set of (row, column) pairs of
//! minimum total cost such that no row and no column is used twice and the
//! smaller dimension is covered entirely. `+inf` entries mark forbidden
//! pairings.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! CostMatrix ─▶ prepare ─▶ AssignmentEngine ─▶ extract ─▶ Assignment
//!   (R×C)      (N×N, reduced)   (Steps 1–5)    (trim to R×C)  (pairs by row)
//! ```
//!
//! **Preprocessing** pads the matrix to square with its largest finite value,
//! gives forbidden cells a finite value that no finite assignment can lose to,
//! and subtracts row then column minimums.
//!
//! **The engine** alternates between starring zeros (tentative assignments)
//! and manufacturing new zeros until every column holds a star.
//!
//! **Extraction** drops the padding and reads the stars off row by row.
//!
//! ## Quick start
//!
//! ```
//! use munkres_core::{solve, CostMatrix};
//!
//! let cost = CostMatrix::from_rows(&[
//!     [0.0, 1.0, 1.0],
//!     [1.0, 0.0, 1.0],
//!     [1.0, 1.0, 0.0],
//! ])?;
//! let assignment = solve(&cost)?;
//! assert_eq!(assignment.pairs(), &[(0, 0), (1, 1), (2, 2)]);
//! # Ok::<(), munkres_core::SolveError>(())
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`matrix`] | [`CostMatrix`] | Caller-owned R×C cost grid |
//! | [`cost`] | [`Cost`] | Element trait, implemented for `f32` and `f64` |
//! | [`preprocess`] | [`WorkingMatrix`] | Squaring, forbidden-cell handling, row/column reduction |
//! | [`engine`] | [`AssignmentEngine`], [`Step`], [`Mask`] | The five-step state machine |
//! | [`extract`] | [`Assignment`] | Trims padding and lists the starred pairs |
//! | [`solver`] | [`Munkres`], [`SolverConfig`] | Runs the three phases in sequence |
//! | [`error`] | [`SolveError`] | Input and invariant errors |
//!
//! ## Logging
//!
//! Events are emitted through `tracing`: a `munkres.solve` debug span per
//! call, a debug event when the assignment completes and trace events for
//! every cover check, augmentation and adjustment. No subscriber is
//! installed by the library.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs only `alloc`. Enable `std`
//! to link the standard library, `serde` for serialisation of matrices,
//! assignments and configuration, and `python-ffi` for the PyO3 bindings.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod cost;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matrix;
pub mod preprocess;
pub mod solver;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use cost::Cost;
pub use engine::{AssignmentEngine, Mark, Mask, Step};
pub use error::{InputError, InvariantViolation, Result, SolveError};
pub use extract::Assignment;
pub use matrix::CostMatrix;
pub use preprocess::WorkingMatrix;
pub use solver::{solve, Munkres, SolverConfig};
