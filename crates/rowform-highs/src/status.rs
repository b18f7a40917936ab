//! Status conversions for the HiGHS engine.

use highs::HighsModelStatus;
use rowform_solver::SolveStatus;

// Raw codes 1..=5 are the engine's load/model/presolve/solve/postsolve
// failures.
const FIRST_FAILURE_CODE: i32 = 1;
const LAST_FAILURE_CODE: i32 = 5;

pub(crate) fn classify(status: HighsModelStatus) -> SolveStatus {
    match status {
        HighsModelStatus::Optimal => SolveStatus::Optimal,
        HighsModelStatus::Infeasible => SolveStatus::Infeasible,
        HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
            SolveStatus::Unbounded
        }
        HighsModelStatus::ReachedTimeLimit => SolveStatus::ReachedTimeLimit,
        HighsModelStatus::ReachedIterationLimit => SolveStatus::ReachedIterationLimit,
        other => classify_code(raw_code(other)),
    }
}

/// Engine status code, verbatim.
pub(crate) fn raw_code(status: HighsModelStatus) -> i32 {
    status as i32
}

fn classify_code(code: i32) -> SolveStatus {
    if (FIRST_FAILURE_CODE..=LAST_FAILURE_CODE).contains(&code) {
        SolveStatus::NumericalFailure
    } else {
        SolveStatus::Unknown
    }
}

pub(crate) fn status_message(status: SolveStatus) -> &'static str {
    match status {
        SolveStatus::Optimal => "Solver returned optimal",
        SolveStatus::Infeasible => "Problem is infeasible",
        SolveStatus::Unbounded => "Problem is unbounded",
        SolveStatus::ReachedTimeLimit => "Solver reached time limit",
        SolveStatus::ReachedIterationLimit => "Solver reached iteration limit",
        SolveStatus::NumericalFailure => "Solver failed numerically",
        SolveStatus::Unknown => "Solver status unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_statuses_classify() {
        assert_eq!(classify(HighsModelStatus::Optimal), SolveStatus::Optimal);
        assert_eq!(
            classify(HighsModelStatus::Infeasible),
            SolveStatus::Infeasible
        );
        assert_eq!(
            classify(HighsModelStatus::Unbounded),
            SolveStatus::Unbounded
        );
        assert_eq!(
            classify(HighsModelStatus::UnboundedOrInfeasible),
            SolveStatus::Unbounded
        );
        assert_eq!(
            classify(HighsModelStatus::ReachedTimeLimit),
            SolveStatus::ReachedTimeLimit
        );
        assert_eq!(
            classify(HighsModelStatus::ReachedIterationLimit),
            SolveStatus::ReachedIterationLimit
        );
    }

    #[test]
    fn test_failure_codes_classify_as_numerical() {
        assert_eq!(classify_code(1), SolveStatus::NumericalFailure);
        assert_eq!(classify_code(5), SolveStatus::NumericalFailure);
        assert_eq!(classify_code(0), SolveStatus::Unknown);
        assert_eq!(classify_code(6), SolveStatus::Unknown);
        assert_eq!(classify_code(99), SolveStatus::Unknown);
    }

    #[test]
    fn test_every_status_has_a_message() {
        for status in [
            SolveStatus::Optimal,
            SolveStatus::Infeasible,
            SolveStatus::Unbounded,
            SolveStatus::ReachedTimeLimit,
            SolveStatus::ReachedIterationLimit,
            SolveStatus::NumericalFailure,
            SolveStatus::Unknown,
        ] {
            assert!(!status_message(status).is_empty());
        }
    }
}
