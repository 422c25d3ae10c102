//! Search budget for boundary enumeration
//!
//! Counts visited search frames and tracks elapsed time, so a runaway
//! enumeration stops cooperatively instead of hanging the caller.

use crate::{FuzzyError, FuzzyResult, ResourceLimits};
use std::time::Instant;
use tracing::warn;

pub(crate) struct SearchBudget<'a> {
    limits: &'a ResourceLimits,
    start_time: Instant,
    nodes: usize,
}

impl<'a> SearchBudget<'a> {
    pub fn new(limits: &'a ResourceLimits) -> Self {
        Self {
            limits,
            start_time: Instant::now(),
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Account for one more search frame
    pub fn tick(&mut self) -> FuzzyResult<()> {
        self.nodes += 1;
        if self.nodes > self.limits.max_search_nodes {
            warn!(nodes = self.nodes, "boundary search exceeded its node budget");
            return Err(FuzzyError::ResourceLimitExceeded {
                limit_name: "max_search_nodes".to_string(),
                limit_value: self.limits.max_search_nodes.to_string(),
                actual_value: self.nodes.to_string(),
                suggestion: "The boundary is too large to enumerate. Ask for the extremal vector only, or raise the node limit.".to_string(),
            });
        }
        self.check_timeout()
    }

    fn check_timeout(&self) -> FuzzyResult<()> {
        let elapsed_ms = self.start_time.elapsed().as_millis() as u64;
        if elapsed_ms > self.limits.max_solve_time_ms {
            warn!(elapsed_ms, "boundary search exceeded its deadline");
            return Err(FuzzyError::ResourceLimitExceeded {
                limit_name: "max_solve_time_ms".to_string(),
                limit_value: self.limits.max_solve_time_ms.to_string(),
                actual_value: elapsed_ms.to_string(),
                suggestion: format!(
                    "Enumeration took {}ms, exceeding the limit of {}ms. Ask for the extremal vector only, or increase the timeout.",
                    elapsed_ms, self.limits.max_solve_time_ms
                ),
            });
        }
        Ok(())
    }
}
