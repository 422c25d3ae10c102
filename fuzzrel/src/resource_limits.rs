/// Resource limits for a single solve
///
/// Boundary enumeration is worst-case exponential in the reduced row count,
/// so every search runs against a node budget and a wall-clock deadline.
/// The defaults are generous enough for all legitimate systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum number of cells in the coefficient matrix
    /// Real usage: ~100 cells, Limit: 1M
    pub max_matrix_cells: usize,

    /// Maximum number of search frames visited during boundary enumeration
    pub max_search_nodes: usize,

    /// Maximum solve time in milliseconds
    pub max_solve_time_ms: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_matrix_cells: 1_000_000,
            max_search_nodes: 5_000_000,
            max_solve_time_ms: 10_000, // 10 seconds
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
