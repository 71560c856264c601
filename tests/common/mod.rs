//! Shared helpers for the integration tests.

#![allow(dead_code)]

use munkres_core::{Assignment, CostMatrix};

/// Minimum total cost over every complete assignment, by exhaustive search.
///
/// `f64::INFINITY` when every complete assignment touches a forbidden cell.
pub fn brute_force_min(cost: &CostMatrix<f64>) -> f64 {
    let (rows, cols) = (cost.rows(), cost.cols());
    let transposed = rows > cols;
    let (small, large) = (rows.min(cols), rows.max(cols));
    let at = |i: usize, j: usize| -> f64 {
        let v = if transposed { cost.get(j, i) } else { cost.get(i, j) };
        v.expect("index within matrix")
    };
    let mut used = vec![false; large];
    search(0, small, large, &mut used, &at)
}

fn search(i: usize, small: usize, large: usize, used: &mut [bool], at: &dyn Fn(usize, usize) -> f64) -> f64 {
    if i == small {
        return 0.0;
    }
    let mut best = f64::INFINITY;
    for j in 0..large {
        if used[j] {
            continue;
        }
        used[j] = true;
        let total = at(i, j) + search(i + 1, small, large, used, at);
        used[j] = false;
        if total < best {
            best = total;
        }
    }
    best
}

/// Cardinality, index range, uniqueness and row ordering of a result.
pub fn assert_valid(assignment: &Assignment, rows: usize, cols: usize) {
    assert_eq!(assignment.len(), rows.min(cols), "pairs: {:?}", assignment.pairs());
    let mut seen_rows = vec![false; rows];
    let mut seen_cols = vec![false; cols];
    for &(r, c) in assignment.pairs() {
        assert!(r < rows && c < cols, "pair ({}, {}) out of range", r, c);
        assert!(!seen_rows[r], "row {} assigned twice", r);
        assert!(!seen_cols[c], "col {} assigned twice", c);
        seen_rows[r] = true;
        seen_cols[c] = true;
    }
    let ordered = assignment.pairs().windows(2).all(|w| w[0].0 < w[1].0);
    assert!(ordered, "pairs not ordered by row: {:?}", assignment.pairs());
}
