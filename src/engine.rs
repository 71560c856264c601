/*
 * This file is part of munkres-core.
 *
 * This program is free software; you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation; either version 2 of the License, or (at your option)
 * any later version. See the GNU General Public License for more details.
 */

//! Assignment engine: the five-step Munkres state machine.
//!
//! The engine owns the reduced [`WorkingMatrix`], the star/prime [`Mask`], the
//! row and column covers and the saved zero register. Each state is a
//! transition method; [`AssignmentEngine::advance`] performs exactly one
//! transition so the machine can be inspected step by step.
//!
//! ```text
//! InitStar ─▶ CheckCover ─┬─▶ Done
//!                ▲        └─▶ FindZero ◀──┐
//!                │              │  │      │
//!                └── Augment ◀──┘  └─▶ Adjust
//! ```
//!
//! # Scan orders
//!
//! InitStar scans row-major and stars greedily. FindZero scans uncovered cells
//! column-major. Both only influence which optimal assignment is returned when
//! several tie.
//!
//! # Invariants
//!
//! - At most one star per row and per column, maintained by every transition.
//! - No cell of the working matrix is ever negative.
//! - Covered columns plus covered rows never exceed the number of stars.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::cost::Cost;
use crate::error::{InvariantViolation, Result};
use crate::preprocess::WorkingMatrix;

// ─── Mask ─────────────────────────────────────────────────────────────────

/// Tag attached to every cell of the working matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    /// Unmarked.
    #[default]
    Normal = 0,
    /// Zero in the current candidate assignment.
    Star = 1,
    /// Zero found by the augmenting-path search.
    Prime = 2,
}

/// N×N grid of [`Mark`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    size: usize,
    marks: Vec<Mark>,
}

impl Mask {
    /// All-normal mask of side `size`.
    pub fn new(size: usize) -> Self {
        Self { size, marks: vec![Mark::Normal; size * size] }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.marks[row * self.size + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.marks[row * self.size + col] = mark;
    }

    /// Column of the star in `row`, if any.
    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.size).find(|&col| self.get(row, col) == Mark::Star)
    }

    /// Row of the star in `col`, if any.
    pub fn star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.size).find(|&row| self.get(row, col) == Mark::Star)
    }

    /// Column of the prime in `row`, if any.
    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.size).find(|&col| self.get(row, col) == Mark::Prime)
    }

    /// Starred cells in row-major order.
    pub fn stars(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == Mark::Star)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Number of starred cells.
    pub fn star_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Star).count()
    }

    fn clear_primes(&mut self) {
        for m in self.marks.iter_mut() {
            if *m == Mark::Prime {
                *m = Mark::Normal;
            }
        }
    }
}

// ─── Alternating sequence ─────────────────────────────────────────────────

/// Ordered chain Z0 (prime), Z1 (star), Z2 (prime), … built during one
/// augmentation. The set gives O(1) membership checks.
struct AlternatingSequence {
    cells: Vec<(usize, usize)>,
    seen: HashSet<(usize, usize)>,
}

impl AlternatingSequence {
    fn starting_at(z0: (usize, usize)) -> Self {
        let mut seen = HashSet::new();
        seen.insert(z0);
        Self { cells: vec![z0], seen }
    }

    /// Append `cell` unless it is already in the chain.
    fn extend(&mut self, cell: (usize, usize)) -> bool {
        if self.seen.insert(cell) {
            self.cells.push(cell);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

// ─── State machine ────────────────────────────────────────────────────────

/// Engine state. `InitStar` through `Adjust` correspond to the classical
/// Steps 1–5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Greedy initial starring.
    InitStar,
    /// Cover starred columns; finish when all are covered.
    CheckCover,
    /// Prime an uncovered zero.
    FindZero,
    /// Flip the alternating sequence from the saved zero.
    Augment,
    /// Manufacture new zeros from the minimum uncovered value.
    Adjust,
    /// Stars form an optimal complete assignment.
    Done,
}

/// Transition budget used when none is configured: comfortably above the
/// `2 (N + 1)^2` transitions a correct run can take.
pub fn default_step_budget(size: usize) -> u64 {
    let n = size as u64 + 1;
    16 * n * n
}

/// The Munkres state machine over one working matrix.
#[derive(Clone, Debug)]
pub struct AssignmentEngine<T> {
    matrix: WorkingMatrix<T>,
    mask: Mask,
    row_cover: Vec<bool>,
    col_cover: Vec<bool>,
    saved_zero: Option<(usize, usize)>,
    state: Step,
    steps: u64,
}

impl<T: Cost> AssignmentEngine<T> {
    /// Start a fresh machine in [`Step::InitStar`] with an empty mask and no
    /// covers.
    pub fn new(matrix: WorkingMatrix<T>) -> Self {
        let n = matrix.size();
        Self {
            matrix,
            mask: Mask::new(n),
            row_cover: vec![false; n],
            col_cover: vec![false; n],
            saved_zero: None,
            state: Step::InitStar,
            steps: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> Step {
        self.state
    }

    /// Transitions performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current working matrix.
    pub fn matrix(&self) -> &WorkingMatrix<T> {
        &self.matrix
    }

    /// Current star/prime mask.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Whether `row` is covered.
    pub fn is_row_covered(&self, row: usize) -> bool {
        self.row_cover[row]
    }

    /// Whether `col` is covered.
    pub fn is_col_covered(&self, col: usize) -> bool {
        self.col_cover[col]
    }

    /// Most recently primed zero.
    pub fn saved_zero(&self) -> Option<(usize, usize)> {
        self.saved_zero
    }

    /// Consume the engine, keeping only the mask.
    pub fn into_mask(self) -> Mask {
        self.mask
    }

    /// Perform one transition and return the new state. A no-op once
    /// [`Step::Done`] is reached.
    pub fn advance(&mut self) -> Result<Step> {
        let next = match self.state {
            Step::InitStar => self.init_star(),
            Step::CheckCover => self.check_cover(),
            Step::FindZero => self.find_zero(),
            Step::Augment => self.augment()?,
            Step::Adjust => self.adjust()?,
            Step::Done => return Ok(Step::Done),
        };
        self.steps += 1;
        self.state = next;
        Ok(next)
    }

    /// Drive the machine to [`Step::Done`], giving up after `max_steps`
    /// transitions.
    pub fn run(&mut self, max_steps: u64) -> Result<()> {
        while self.state != Step::Done {
            if self.steps >= max_steps {
                return Err(InvariantViolation::StepBudgetExhausted { steps: self.steps }.into());
            }
            self.advance()?;
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Step 1: star each zero whose row and column hold no star yet.
    fn init_star(&mut self) -> Step {
        let n = self.size();
        let mut row_starred = vec![false; n];
        let mut col_starred = vec![false; n];
        for row in 0..n {
            for col in 0..n {
                if self.matrix.at(row, col) == T::ZERO && !row_starred[row] && !col_starred[col] {
                    self.mask.set(row, col, Mark::Star);
                    row_starred[row] = true;
                    col_starred[col] = true;
                }
            }
        }
        Step::CheckCover
    }

    /// Step 2: cover every starred column.
    fn check_cover(&mut self) -> Step {
        let n = self.size();
        for (_, col) in self.mask.stars() {
            self.col_cover[col] = true;
        }
        let covered = self.col_cover.iter().filter(|&&c| c).count();

        if covered >= n {
            tracing::debug!(covered, size = n, steps = self.steps, "assignment complete");
            Step::Done
        } else {
            tracing::trace!(covered, size = n, "columns covered");
            Step::FindZero
        }
    }

    /// Step 3: prime one uncovered zero.
    fn find_zero(&mut self) -> Step {
        let Some((row, col)) = self.find_uncovered_zero() else {
            return Step::Adjust;
        };
        self.mask.set(row, col, Mark::Prime);
        self.saved_zero = Some((row, col));

        match self.mask.star_in_row(row) {
            Some(star_col) => {
                self.row_cover[row] = true;
                self.col_cover[star_col] = false;
                Step::FindZero
            }
            None => Step::Augment,
        }
    }

    /// Column-major scan for a zero in an uncovered row and column.
    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        let n = self.size();
        (0..n)
            .filter(|&col| !self.col_cover[col])
            .find_map(|col| {
                (0..n)
                    .find(|&row| !self.row_cover[row] && self.matrix.at(row, col) == T::ZERO)
                    .map(|row| (row, col))
            })
    }

    /// Step 4: grow the assignment by one along the alternating sequence.
    fn augment(&mut self) -> Result<Step> {
        let z0 = self.saved_zero.take().ok_or(InvariantViolation::MissingSavedZero)?;
        let mut sequence = AlternatingSequence::starting_at(z0);

        let mut col = z0.1;
        while let Some(star_row) = self.mask.star_in_col(col) {
            if !sequence.extend((star_row, col)) {
                break;
            }
            let Some(prime_col) = self.mask.prime_in_row(star_row) else {
                break;
            };
            if !sequence.extend((star_row, prime_col)) {
                break;
            }
            col = prime_col;
        }

        for &(row, col) in &sequence.cells {
            match self.mask.get(row, col) {
                Mark::Star => self.mask.set(row, col, Mark::Normal),
                Mark::Prime => self.mask.set(row, col, Mark::Star),
                Mark::Normal => {}
            }
        }
        tracing::trace!(length = sequence.len(), "augmented");

        self.mask.clear_primes();
        self.row_cover.fill(false);
        self.col_cover.fill(false);
        Ok(Step::CheckCover)
    }

    /// Step 5: add the smallest uncovered value to covered rows and subtract
    /// it from uncovered columns.
    fn adjust(&mut self) -> Result<Step> {
        let n = self.size();
        let mut h: Option<T> = None;
        for row in (0..n).filter(|&r| !self.row_cover[r]) {
            for col in (0..n).filter(|&c| !self.col_cover[c]) {
                let v = self.matrix.at(row, col);
                if h.map_or(true, |m| v < m) {
                    h = Some(v);
                }
            }
        }
        let h = h.ok_or(InvariantViolation::NoUncoveredCell)?;
        if !(h.is_finite() && h > T::ZERO) {
            return Err(InvariantViolation::NonFiniteAdjustment { value: h.to_f64() }.into());
        }

        // A covered row meeting an uncovered column gains and loses h; skip
        // it so the cell stays bit-identical.
        for row in 0..n {
            for col in 0..n {
                match (self.row_cover[row], self.col_cover[col]) {
                    (true, true) => {
                        let x = self.matrix.at_mut(row, col);
                        *x = *x + h;
                    }
                    (false, false) => {
                        let x = self.matrix.at_mut(row, col);
                        *x = *x - h;
                    }
                    _ => {}
                }
            }
        }
        tracing::trace!(h = h.to_f64(), "adjusted");
        Ok(Step::FindZero)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    fn engine(size: usize, data: &[f64]) -> AssignmentEngine<f64> {
        AssignmentEngine::new(WorkingMatrix::from_square(size, data.to_vec()).unwrap())
    }

    fn assert_star_property(mask: &Mask) {
        let n = mask.size();
        for i in 0..n {
            let in_row = (0..n).filter(|&c| mask.get(i, c) == Mark::Star).count();
            let in_col = (0..n).filter(|&r| mask.get(r, i) == Mark::Star).count();
            assert!(in_row <= 1, "row {} holds {} stars", i, in_row);
            assert!(in_col <= 1, "col {} holds {} stars", i, in_col);
        }
    }

    #[test]
    fn test_init_star_is_row_major_greedy() {
        let mut e = engine(3, &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(e.advance().unwrap(), Step::CheckCover);
        let stars: Vec<_> = e.mask().stars().collect();
        // (0,0) first; (1,0) blocked by column 0; (2,1) free
        assert_eq!(stars, vec![(0, 0), (2, 1)]);
        assert_star_property(e.mask());
    }

    #[test]
    fn test_check_cover_finishes_on_diagonal() {
        let mut e = engine(3, &[0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
        e.advance().unwrap();
        assert_eq!(e.advance().unwrap(), Step::Done);
        assert!((0..3).all(|c| e.is_col_covered(c)));
        assert_eq!(e.steps(), 2);
        // further advances are no-ops
        assert_eq!(e.advance().unwrap(), Step::Done);
        assert_eq!(e.steps(), 2);
    }

    #[test]
    fn test_find_zero_covers_row_and_uncovers_star_column() {
        // stars at (0,0); zero at (0,1) shares the starred row
        let mut e = engine(2, &[0.0, 0.0, 0.0, 5.0]);
        e.advance().unwrap();
        assert_eq!(e.advance().unwrap(), Step::FindZero);
        assert!(e.is_col_covered(0));

        assert_eq!(e.advance().unwrap(), Step::FindZero);
        assert_eq!(e.saved_zero(), Some((0, 1)));
        assert_eq!(e.mask().get(0, 1), Mark::Prime);
        assert!(e.is_row_covered(0));
        assert!(!e.is_col_covered(0));

        // (1,0) is now uncovered and its row has no star
        assert_eq!(e.advance().unwrap(), Step::Augment);
        assert_eq!(e.saved_zero(), Some((1, 0)));
    }

    #[test]
    fn test_augment_flips_sequence_and_resets_state() {
        let mut e = engine(2, &[0.0, 0.0, 0.0, 5.0]);
        for _ in 0..4 {
            e.advance().unwrap();
        }
        assert_eq!(e.state(), Step::Augment);
        assert_eq!(e.advance().unwrap(), Step::CheckCover);

        let stars: Vec<_> = e.mask().stars().collect();
        assert_eq!(stars, vec![(0, 1), (1, 0)]);
        assert!((0..2).all(|i| !e.is_row_covered(i) && !e.is_col_covered(i)));
        assert!((0..2).all(|r| (0..2).all(|c| e.mask().get(r, c) != Mark::Prime)));
        assert_eq!(e.saved_zero(), None);

        assert_eq!(e.advance().unwrap(), Step::Done);
    }

    #[test]
    fn test_adjust_manufactures_zero() {
        // single zero column: both rows want column 0
        let mut e = engine(2, &[0.0, 3.0, 0.0, 1.0]);
        e.advance().unwrap(); // star (0,0)
        e.advance().unwrap(); // cover col 0
        assert_eq!(e.advance().unwrap(), Step::Adjust);
        assert_eq!(e.advance().unwrap(), Step::FindZero);
        // h = 1 subtracted from uncovered column 1
        assert_eq!(e.matrix().as_slice(), &[0.0, 2.0, 0.0, 0.0]);
        assert_eq!(e.advance().unwrap(), Step::Augment);
        assert_eq!(e.saved_zero(), Some((1, 1)));
    }

    #[test]
    fn test_adjust_leaves_covered_row_uncovered_column_untouched() {
        let mut e = engine(3, &[0.0, 0.0, 0.3, 0.7, 1.1, 2.9, 1.3, 0.9, 0.7]);
        e.advance().unwrap(); // star (0,0)
        e.advance().unwrap(); // cover col 0
        // prime (0,1): row 0 covered, col 0 released
        assert_eq!(e.advance().unwrap(), Step::FindZero);
        assert_eq!(e.advance().unwrap(), Step::Adjust);
        assert!(e.is_row_covered(0));
        assert!((0..3).all(|c| !e.is_col_covered(c)));

        let before: Vec<u64> = (0..3).map(|c| e.matrix().at(0, c).to_bits()).collect();
        assert_eq!(e.advance().unwrap(), Step::FindZero);
        let after: Vec<u64> = (0..3).map(|c| e.matrix().at(0, c).to_bits()).collect();
        assert_eq!(after, before);

        // h = 0.7 came off the uncovered rows
        assert_eq!(e.matrix().at(1, 0), 0.0);
        assert_eq!(e.matrix().at(2, 2), 0.0);
        assert!(e.matrix().as_slice().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_run_completes_with_full_star_set() {
        let mut e = engine(3, &[0.0, 0.0, 2.0, 0.0, 4.0, 3.0, 0.0, 5.0, 6.0]);
        e.run(default_step_budget(3)).unwrap();
        assert_star_property(e.mask());
        assert_eq!(e.mask().star_count(), 3);
        assert!(e.matrix().as_slice().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_run_respects_budget() {
        let mut e = engine(3, &[0.0, 0.0, 2.0, 0.0, 4.0, 3.0, 0.0, 5.0, 6.0]);
        let err = e.run(2).unwrap_err();
        assert_eq!(
            err,
            SolveError::InternalInvariantViolation(InvariantViolation::StepBudgetExhausted {
                steps: 2
            })
        );
    }

    #[test]
    fn test_adjust_rejects_non_finite_minimum() {
        let mut e = engine(2, &[0.0, f64::INFINITY, 0.0, f64::INFINITY]);
        e.advance().unwrap();
        e.advance().unwrap();
        assert_eq!(e.advance().unwrap(), Step::Adjust);
        let err = e.advance().unwrap_err();
        assert!(matches!(
            err,
            SolveError::InternalInvariantViolation(InvariantViolation::NonFiniteAdjustment { .. })
        ));
    }

    #[test]
    fn test_alternating_sequence_rejects_repeats() {
        let mut seq = AlternatingSequence::starting_at((0, 1));
        assert!(seq.extend((2, 1)));
        assert!(!seq.extend((0, 1)));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.cells, vec![(0, 1), (2, 1)]);
    }

    #[test]
    fn test_default_budget_grows_quadratically() {
        assert_eq!(default_step_budget(1), 64);
        assert_eq!(default_step_budget(3), 256);
    }
}
