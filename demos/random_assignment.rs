//! # Random cost-matrix demo
//!
//! Builds an R×C matrix of random integer costs in [1, 50], prints it, solves
//! it and prints the assignment.
//!
//! ```bash
//! cargo run --example random_assignment            # 4 x 3
//! cargo run --example random_assignment -- 6 9     # 6 x 9
//! RUST_LOG=munkres_core=trace cargo run --example random_assignment
//! ```

use std::env;
use std::process::ExitCode;

use munkres_core::{solve, CostMatrix};
use rand::Rng;
use tracing_subscriber::EnvFilter;

const DEFAULT_ROWS: usize = 4;
const DEFAULT_COLS: usize = 3;

// ── Display helpers ───────────────────────────────────────────────────────────

fn print_matrix(label: &str, m: &CostMatrix<f64>) {
    println!("{label}");
    for r in 0..m.rows() {
        let cells: Vec<String> = m.row(r).iter().map(|v| format!("{v:>6.1}")).collect();
        println!("  {}", cells.join(""));
    }
    println!();
}

fn dimensions() -> Result<(usize, usize), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok((DEFAULT_ROWS, DEFAULT_COLS)),
        [rows, cols] => {
            let rows = rows.parse().map_err(|e| format!("bad row count {rows:?}: {e}"))?;
            let cols = cols.parse().map_err(|e| format!("bad column count {cols:?}: {e}"))?;
            Ok((rows, cols))
        }
        _ => Err("usage: random_assignment [ROWS COLS]".to_string()),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (rows, cols) = match dimensions() {
        Ok(d) => d,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::thread_rng();
    let cost = match CostMatrix::from_fn(rows, cols, |_, _| rng.gen_range(1..=50) as f64) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    print_matrix("cost =", &cost);

    match solve(&cost) {
        Ok(assignment) => {
            println!("assignments =");
            for &(r, c) in assignment.iter() {
                println!("  ({r}, {c})  cost {:.1}", cost.get(r, c).unwrap_or(f64::NAN));
            }
            println!("\ntotal = {:.1}", assignment.total_cost(&cost));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("solve failed: {e}");
            ExitCode::FAILURE
        }
    }
}
