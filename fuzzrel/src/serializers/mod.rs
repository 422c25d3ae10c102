pub mod json;

pub use json::{matrix_from_json, solution_to_json, system_from_json, SystemDocument};
