use fuzzrel::serializers::{matrix_from_json, solution_to_json, system_from_json};
use fuzzrel::{Family, FuzzyError, Mode, Solution, Solver};

#[test]
fn test_system_document_parses() {
    let doc = system_from_json(
        r#"{ "family": "max-lukasiewicz", "mode": "le", "a": [[0.6, 0.2]], "b": [0.3] }"#,
    )
    .unwrap();
    assert_eq!(doc.family, Family::MaxLukasiewicz);
    assert_eq!(doc.mode, Mode::AtMost);
    assert_eq!(doc.a.shape(), (1, 2));
    assert_eq!(doc.b, vec![0.3]);
}

#[test]
fn test_mode_defaults_to_equality() {
    let doc = system_from_json(r#"{ "family": "godel", "a": [[0.4]], "b": [0.4] }"#).unwrap();
    assert_eq!(doc.mode, Mode::Equality);
}

#[test]
fn test_out_of_range_coefficients_are_clamped() {
    let doc = system_from_json(r#"{ "family": "godel", "a": [[1.5, -2]], "b": [0.4] }"#).unwrap();
    assert_eq!(doc.a.to_rows(), vec![vec![1.0, 0.0]]);
}

#[test]
fn test_unknown_family_is_a_serialization_error() {
    let err = system_from_json(r#"{ "family": "max-product", "a": [[0.4]], "b": [0.4] }"#)
        .unwrap_err();
    match err {
        FuzzyError::Serialization(msg) => assert!(msg.contains("max-product"), "{}", msg),
        other => panic!("Expected Serialization error, got {:?}", other),
    }
}

#[test]
fn test_ragged_matrix_is_rejected() {
    let err = matrix_from_json("[[0.1, 0.2], [0.3]]").unwrap_err();
    match err {
        FuzzyError::Serialization(msg) => assert!(msg.contains("Ragged matrix"), "{}", msg),
        other => panic!("Expected Serialization error, got {:?}", other),
    }
}

#[test]
fn test_solution_json_shape() {
    let doc = system_from_json(r#"{ "family": "godel", "a": [[0.4]], "b": [0.4] }"#).unwrap();
    let solution = Solver::new(doc.family)
        .solve_full(&doc.a, &doc.b, doc.mode)
        .unwrap();
    let json = solution_to_json(&solution).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["family"], "godel");
    assert_eq!(value["mode"], "eq");
    assert_eq!(value["exist"], true);
    assert_eq!(value["extremal"], serde_json::json!([0.4]));
    assert_eq!(value["boundary"], serde_json::json!([[0.4]]));
    assert_eq!(value["help_rows"], 1);
    assert!(value.get("contradict").is_none());

    let back: Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);
}

#[test]
fn test_inconsistent_solution_lists_contradicting_rows() {
    let doc = system_from_json(
        r#"{ "family": "max-lukasiewicz", "a": [[0.6], [0.05]], "b": [0.3, 0.9] }"#,
    )
    .unwrap();
    let solution = Solver::new(doc.family)
        .solve_full(&doc.a, &doc.b, doc.mode)
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&solution_to_json(&solution).unwrap()).unwrap();
    assert_eq!(value["exist"], false);
    assert_eq!(value["contradict"], serde_json::json!([1]));
}
