//! Solve status classification.

/// Common status values engines map their raw codes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// Optimal solution found and proven.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Engine reached its time limit (may hold a feasible incumbent).
    ReachedTimeLimit,
    /// Engine reached its iteration limit (may hold a feasible incumbent).
    ReachedIterationLimit,
    /// Engine failed numerically while solving.
    NumericalFailure,
    /// Status is unknown or the engine did not complete.
    Unknown,
}

impl SolveStatus {
    /// Check if the status indicates a proven optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }

    /// Check if the engine may hold usable variable values.
    pub fn is_feasible(self) -> bool {
        matches!(
            self,
            SolveStatus::Optimal
                | SolveStatus::ReachedTimeLimit
                | SolveStatus::ReachedIterationLimit
        )
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolveStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolveStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::ReachedTimeLimit => "time_limit",
            SolveStatus::ReachedIterationLimit => "iteration_limit",
            SolveStatus::NumericalFailure => "numerical_failure",
            SolveStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
