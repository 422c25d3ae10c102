#![no_main]

use fuzzrel::{BoundedMatrix, Family, Mode, ResourceLimits, Solver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let family = if data[0] % 2 == 0 {
        Family::Godel
    } else {
        Family::MaxLukasiewicz
    };
    let mode = match data[1] % 3 {
        0 => Mode::Equality,
        1 => Mode::AtMost,
        _ => Mode::AtLeast,
    };
    let cols = (data[2] as usize % 5) + 1;
    let values: Vec<f64> = data[3..].iter().map(|v| *v as f64 / 255.0).collect();
    let rows = (values.len() / (cols + 1)).min(6);

    let a = match BoundedMatrix::new(rows, cols, values[..rows * cols].to_vec()) {
        Ok(a) => a,
        Err(_) => return,
    };
    let b = &values[rows * cols..rows * cols + rows];

    let limits = ResourceLimits {
        max_search_nodes: 100_000,
        ..ResourceLimits::default()
    };
    let solver = Solver::new(family).with_limits(limits);
    if let Ok(solution) = solver.solve_full(&a, b, mode) {
        assert!(solution.extremal.iter().all(|v| (0.0..=1.0).contains(v)));
        if !solution.exist {
            assert!(!solution.contradict.is_empty());
        }
    }
});
