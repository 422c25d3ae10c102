use crate::solver::budget::SearchBudget;
use crate::{FuzzyError, ResourceLimits};
use std::thread;
use std::time::Duration;

#[test]
fn test_tick_counts_nodes() {
    let limits = ResourceLimits::default();
    let mut budget = SearchBudget::new(&limits);
    for _ in 0..3 {
        budget.tick().unwrap();
    }
    assert_eq!(budget.nodes(), 3);
}

#[test]
fn test_node_limit_is_inclusive() {
    let limits = ResourceLimits {
        max_search_nodes: 2,
        ..ResourceLimits::default()
    };
    let mut budget = SearchBudget::new(&limits);
    assert!(budget.tick().is_ok());
    assert!(budget.tick().is_ok());

    match budget.tick() {
        Err(FuzzyError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            ..
        }) => {
            assert_eq!(limit_name, "max_search_nodes");
            assert_eq!(limit_value, "2");
            assert_eq!(actual_value, "3");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_deadline_is_checked_on_tick() {
    let limits = ResourceLimits {
        max_solve_time_ms: 0,
        ..ResourceLimits::default()
    };
    let mut budget = SearchBudget::new(&limits);
    thread::sleep(Duration::from_millis(5));

    match budget.tick() {
        Err(FuzzyError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_solve_time_ms");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}
