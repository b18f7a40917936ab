//! Solution records decoded from engine reports.

use rowform_expr::VariableId;

use crate::engine::EngineReport;
use crate::status::SolveStatus;

/// Threshold above which an integral variable's value reads as one.
const ONE_THRESHOLD: f64 = 0.01;

/// Decoded outcome of one optimize call.
#[derive(Debug, Clone)]
pub struct Solution {
    optimal: bool,
    status: SolveStatus,
    status_code: i32,
    message: String,
    gap: f64,
    objective: f64,
    values: Vec<f64>,
}

impl Solution {
    /// Decode a raw engine report for a registry of `var_count` variables.
    ///
    /// The value vector is padded with zeros or truncated to exactly
    /// `var_count` entries no matter what the engine returned, so callers
    /// can index it under every status.
    pub fn from_report(report: EngineReport, var_count: usize) -> Self {
        let EngineReport {
            status,
            status_code,
            message,
            gap,
            objective,
            mut values,
        } = report;
        values.resize(var_count, 0.0);
        Self {
            optimal: status.is_optimal(),
            status,
            status_code,
            message,
            gap,
            objective,
            values,
        }
    }

    /// Whether the engine proved the solution optimal.
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Classified solve status.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Engine status code, verbatim.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Best-effort outcome text. Only the status and code are stable.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reported MIP gap.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Engine-reported objective value. Meaningful only when
    /// `status().is_feasible()`.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Values in declaration order, exactly one per declared variable.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of one variable, if it was declared.
    pub fn value(&self, var_id: VariableId) -> Option<f64> {
        self.values.get(var_id.inner() as usize).copied()
    }

    /// Whether an integral variable took the value one. A convenience read
    /// that is not meaningful for continuous variables.
    pub fn is_one(&self, var_id: VariableId) -> bool {
        self.value(var_id).is_some_and(|v| v > ONE_THRESHOLD)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Solution;
    use crate::engine::EngineReport;
    use crate::status::SolveStatus;
    use rowform_expr::VariableId;

    fn report(status: SolveStatus, values: Vec<f64>) -> EngineReport {
        EngineReport {
            status,
            status_code: 7,
            message: "stub outcome".to_string(),
            gap: 0.25,
            objective: 12.5,
            values,
        }
    }

    #[test]
    fn short_value_vectors_are_zero_padded() {
        let solution = Solution::from_report(report(SolveStatus::Infeasible, Vec::new()), 3);
        assert_eq!(solution.values(), &[0.0, 0.0, 0.0]);
        assert!(!solution.is_optimal());
    }

    #[test]
    fn long_value_vectors_are_truncated() {
        let solution = Solution::from_report(
            report(SolveStatus::Optimal, vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            2,
        );
        assert_eq!(solution.values(), &[1.0, 2.0]);
    }

    #[test]
    fn optimal_flag_tracks_status() {
        let solution = Solution::from_report(report(SolveStatus::Optimal, vec![1.0]), 1);
        assert!(solution.is_optimal());
        assert_eq!(solution.status(), SolveStatus::Optimal);

        let solution = Solution::from_report(report(SolveStatus::ReachedTimeLimit, vec![1.0]), 1);
        assert!(!solution.is_optimal());
        assert!(solution.status().is_feasible());
    }

    #[test]
    fn raw_report_fields_pass_through() {
        let solution = Solution::from_report(report(SolveStatus::Unknown, Vec::new()), 0);
        assert_eq!(solution.status_code(), 7);
        assert_eq!(solution.message(), "stub outcome");
        assert_eq!(solution.gap(), 0.25);
        assert_eq!(solution.objective(), 12.5);
    }

    #[test]
    fn value_lookup_respects_declared_range() {
        let solution = Solution::from_report(report(SolveStatus::Optimal, vec![4.0, 0.5]), 2);
        assert_eq!(solution.value(VariableId::new(0)), Some(4.0));
        assert_eq!(solution.value(VariableId::new(1)), Some(0.5));
        assert_eq!(solution.value(VariableId::new(2)), None);
    }

    #[test]
    fn is_one_uses_threshold() {
        let solution = Solution::from_report(
            report(SolveStatus::Optimal, vec![1.0, 0.0, 0.005, 0.02]),
            4,
        );
        assert!(solution.is_one(VariableId::new(0)));
        assert!(!solution.is_one(VariableId::new(1)));
        assert!(!solution.is_one(VariableId::new(2)));
        assert!(solution.is_one(VariableId::new(3)));
        assert!(!solution.is_one(VariableId::new(9)));
    }
}
