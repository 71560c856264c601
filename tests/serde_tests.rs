//! Serialisation round-trip tests.
//!
//! Run with: `cargo test --features serde`

#[cfg(feature = "serde")]
mod tests {
    use munkres_core::{solve, Assignment, CostMatrix, Munkres, SolverConfig};

    fn sample() -> CostMatrix<f64> {
        CostMatrix::from_rows(&[[4.0_f64, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0], [1.0, 1.0, 1.0]])
            .unwrap()
    }

    #[test]
    fn test_cost_matrix_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["rows"], 4);
        assert_eq!(json["cols"], 3);
        assert_eq!(json["data"].as_array().map(|a| a.len()), Some(12));
    }

    #[test]
    fn test_cost_matrix_round_trip_solves_identically() {
        let cost = sample();
        let json = serde_json::to_string(&cost).unwrap();
        let restored: CostMatrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cost);
        assert_eq!(solve(&restored).unwrap(), solve(&cost).unwrap());
    }

    #[test]
    fn test_inconsistent_matrix_rejected_on_deserialise() {
        let json = r#"{"rows":2,"cols":2,"data":[1.0,2.0,3.0]}"#;
        let err = serde_json::from_str::<CostMatrix<f64>>(json).unwrap_err();
        assert!(err.to_string().contains("expected 4"), "{}", err);
        let json = r#"{"rows":0,"cols":3,"data":[]}"#;
        assert!(serde_json::from_str::<CostMatrix<f64>>(json).is_err());
    }

    #[test]
    fn test_assignment_round_trip() {
        let cost = sample();
        let assignment = solve(&cost).unwrap();
        let json = serde_json::to_string(&assignment).unwrap();
        let restored: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, assignment);
        assert_eq!(restored.total_cost(&cost), assignment.total_cost(&cost));
    }

    #[test]
    fn test_solver_config_from_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_steps":500}"#).unwrap();
        assert_eq!(config.max_steps, Some(500));
        let solver = Munkres::new(config);
        assert_eq!(solver.solve(&sample()).unwrap().len(), 3);

        let default: SolverConfig = serde_json::from_str(r#"{"max_steps":null}"#).unwrap();
        assert_eq!(default, SolverConfig::default());
    }
}
