//! Buffered HiGHS engine.
//!
//! This module contains unsafe code for interacting with the C library.
#![allow(unsafe_code)]

use std::ffi::CStr;
use std::fmt;

use highs::{Col, RowProblem, Sense as HighsSense, SolvedModel};
use tracing::{debug, trace, warn};

use rowform_expr::{CanonicalRow, RelOp, VariableId};
use rowform_solver::{Direction, Engine, EngineError, EngineReport, VarKind, VarSpec};

use crate::dump;
use crate::status::{classify, raw_code, status_message};

/// A buffered constraint row in canonical form.
#[derive(Debug, Clone)]
pub(crate) struct RowSpec {
    pub(crate) entries: Vec<(VariableId, f64)>,
    pub(crate) op: RelOp,
    pub(crate) rhs: f64,
}

/// HiGHS-backed engine.
///
/// The engine buffers the declared columns, rows and objective, and builds
/// a fresh native problem for every solve. The native `RowProblem` is
/// consumed by `optimise`, so buffering is what lets the same declaration
/// be solved more than once.
pub struct HighsEngine {
    cols: Vec<VarSpec>,
    rows: Vec<RowSpec>,
    objective: Vec<(VariableId, f64)>,
    direction: Direction,
    time_limit: Option<f64>,
    verbose: bool,
    loading_rows: bool,
}

impl HighsEngine {
    /// Create an engine with no model loaded.
    pub fn new() -> Self {
        debug!(
            component = "solver",
            operation = "init_highs",
            status = "success",
            "Creating HiGHS engine"
        );
        HighsEngine {
            cols: Vec::new(),
            rows: Vec::new(),
            objective: Vec::new(),
            direction: Direction::Minimize,
            time_limit: None,
            verbose: false,
            loading_rows: true,
        }
    }

    /// Dense objective vector in column order. Duplicate ids accumulate;
    /// terms referencing undeclared columns are skipped with a warning.
    fn objective_coefficients(&self) -> Vec<f64> {
        let mut coefficients = vec![0.0; self.cols.len()];
        for (var_id, coeff) in &self.objective {
            match coefficients.get_mut(var_id.inner() as usize) {
                Some(slot) => *slot += *coeff,
                None => warn!(
                    component = "solver",
                    operation = "set_objective",
                    status = "warn",
                    var_id = var_id.inner(),
                    num_columns = self.cols.len(),
                    "Objective term references an undeclared variable; skipping"
                ),
            }
        }
        coefficients
    }

    fn build_problem(&self) -> RowProblem {
        let objective = self.objective_coefficients();
        let mut problem = RowProblem::default();
        let mut handles: Vec<Col> = Vec::with_capacity(self.cols.len());

        for (spec, obj_coeff) in self.cols.iter().zip(objective) {
            trace!(
                component = "solver",
                operation = "add_column",
                status = "success",
                lower = spec.lower,
                upper = spec.upper,
                kind = spec.kind.as_str(),
                obj_coeff,
                "Adding column"
            );
            let col = match spec.kind {
                VarKind::Continuous => problem.add_column(obj_coeff, spec.lower..=spec.upper),
                VarKind::Integer => problem.add_integer_column(obj_coeff, spec.lower..=spec.upper),
                // Binary pins the domain regardless of the stored bounds.
                VarKind::Binary => problem.add_integer_column(obj_coeff, 0.0..=1.0),
            };
            handles.push(col);
        }

        for row in &self.rows {
            let factors: Vec<(Col, f64)> = row
                .entries
                .iter()
                .map(|(var_id, coeff)| (handles[var_id.inner() as usize], *coeff))
                .collect();
            let (lower, upper) = match row.op {
                RelOp::Equal => (row.rhs, row.rhs),
                RelOp::LessOrEqual => (f64::NEG_INFINITY, row.rhs),
                RelOp::GreaterOrEqual => (row.rhs, f64::INFINITY),
            };
            problem.add_row(lower..=upper, factors);
        }

        problem
    }

    fn has_integral_columns(&self) -> bool {
        self.cols.iter().any(|spec| spec.kind.is_integral())
    }

    /// The gap HiGHS reports is only meaningful for MIPs; it comes back as
    /// infinity for pure LPs.
    fn reported_gap(&self, solved: &SolvedModel) -> f64 {
        if !self.has_integral_columns() {
            return 0.0;
        }
        let gap = solved.mip_gap();
        if gap.is_finite() { gap } else { 0.0 }
    }
}

impl Engine for HighsEngine {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn reset(&mut self, vars: &[VarSpec], verbose: bool) -> Result<(), EngineError> {
        debug!(
            component = "solver",
            operation = "reset",
            status = "success",
            num_columns = vars.len(),
            verbose,
            "Rebuilding model"
        );
        self.cols = vars.to_vec();
        self.rows.clear();
        self.objective.clear();
        self.direction = Direction::Minimize;
        self.time_limit = None;
        self.verbose = verbose;
        self.loading_rows = true;
        Ok(())
    }

    fn add_row(&mut self, row: &CanonicalRow, op: RelOp) -> Result<(), EngineError> {
        let num_columns = self.cols.len();
        for (var_id, _) in row.entries() {
            if var_id.inner() as usize >= num_columns {
                warn!(
                    component = "solver",
                    operation = "add_row",
                    status = "error",
                    var_id = var_id.inner(),
                    num_columns,
                    "Constraint references an undeclared variable"
                );
                return Err(EngineError::InvalidVariableId {
                    var_id: var_id.inner(),
                    declared: num_columns,
                });
            }
        }
        trace!(
            component = "solver",
            operation = "add_row",
            status = "success",
            terms = row.len(),
            op = op.as_str(),
            rhs = row.constant(),
            "Buffering row"
        );
        self.rows.push(RowSpec {
            entries: row.entries().to_vec(),
            op,
            rhs: row.constant(),
        });
        Ok(())
    }

    fn set_objective(&mut self, terms: &[(VariableId, f64)], direction: Direction) {
        debug!(
            component = "solver",
            operation = "set_objective",
            status = "success",
            terms = terms.len(),
            direction = direction.as_str(),
            "Replacing objective"
        );
        self.objective = terms.to_vec();
        self.direction = direction;
    }

    fn set_time_limit(&mut self, seconds: f64) {
        trace!(
            component = "solver",
            operation = "set_time_limit",
            status = "success",
            seconds,
            "Updating time bound"
        );
        self.time_limit = Some(seconds);
    }

    fn finish_rows(&mut self) {
        if self.loading_rows {
            trace!(
                component = "solver",
                operation = "finish_rows",
                status = "success",
                num_rows = self.rows.len(),
                "Row loading closed"
            );
            self.loading_rows = false;
        }
    }

    fn solve(&mut self) -> EngineReport {
        debug!(
            component = "solver",
            operation = "solve",
            status = "success",
            num_columns = self.cols.len(),
            num_rows = self.rows.len(),
            direction = self.direction.as_str(),
            solver_version = highs_version().as_deref().unwrap_or("unknown"),
            "Solving model"
        );

        let sense = match self.direction {
            Direction::Minimize => HighsSense::Minimise,
            Direction::Maximize => HighsSense::Maximise,
        };
        let mut model = self.build_problem().optimise(sense);
        if self.verbose {
            model.set_option("output_flag", true);
            model.set_option("log_to_console", true);
        } else {
            model.make_quiet();
        }
        // The rebuilt native model starts with no time bound, so only a
        // finite limit needs writing.
        if let Some(limit) = self.time_limit.filter(|limit| limit.is_finite()) {
            model.set_option("time_limit", limit);
        }

        let solved = model.solve();
        let native = solved.status();
        let status = classify(native);
        let code = raw_code(native);
        trace!(
            component = "solver",
            operation = "solve",
            status = "success",
            solve_status = status.as_str(),
            status_code = code,
            "Solution status received"
        );

        let mut report = EngineReport::without_solution(status, code, status_message(status));
        if status.is_feasible() {
            report.values = solved.get_solution().columns().to_vec();
            report.objective = solved.objective_value();
            report.gap = self.reported_gap(&solved);
        }
        report
    }

    fn render_model(&self) -> String {
        dump::render_model(&self.cols, &self.rows, &self.objective, self.direction)
    }
}

impl Default for HighsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HighsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighsEngine")
            .field("num_variables", &self.cols.len())
            .field("num_constraints", &self.rows.len())
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Return the linked HiGHS library version string, if available.
pub fn highs_version() -> Option<String> {
    let ptr = unsafe { highs_sys::Highs_version() };
    if ptr.is_null() {
        return None;
    }
    let version = unsafe { CStr::from_ptr(ptr) };
    version.to_str().ok().map(str::to_owned)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{HighsEngine, highs_version};
    use rowform_expr::{CanonicalRow, LinearExpr, RelOp, VariableId};
    use rowform_solver::{Direction, Engine, EngineError, VarSpec};

    fn row(lhs: &LinearExpr, rhs: &LinearExpr) -> CanonicalRow {
        CanonicalRow::from_sides(lhs, rhs)
    }

    #[test]
    fn test_reset_discards_buffered_state() {
        let mut engine = HighsEngine::new();
        engine
            .reset(&[VarSpec::continuous(0.0, 10.0)], false)
            .unwrap();
        let lhs = LinearExpr::var(VariableId::new(0));
        engine
            .add_row(&row(&lhs, &LinearExpr::from_constant(4.0)), RelOp::LessOrEqual)
            .unwrap();
        engine.set_objective(&[(VariableId::new(0), 1.0)], Direction::Maximize);
        engine.set_time_limit(5.0);
        engine.finish_rows();

        engine
            .reset(&[VarSpec::continuous(0.0, 1.0), VarSpec::binary()], true)
            .unwrap();
        assert!(engine.rows.is_empty());
        assert!(engine.objective.is_empty());
        assert_eq!(engine.time_limit, None);
        assert_eq!(engine.direction, Direction::Minimize);
        assert!(engine.verbose);
        assert!(engine.loading_rows);
        assert_eq!(engine.cols.len(), 2);
    }

    #[test]
    fn test_row_with_unknown_variable_is_rejected() {
        let mut engine = HighsEngine::new();
        engine
            .reset(&[VarSpec::continuous(0.0, 1.0)], false)
            .unwrap();
        let lhs = LinearExpr::var(VariableId::new(3));
        let err = engine
            .add_row(&row(&lhs, &LinearExpr::from_constant(1.0)), RelOp::Equal)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidVariableId {
                var_id: 3,
                declared: 1
            }
        );
        assert!(engine.rows.is_empty());
    }

    #[test]
    fn test_objective_duplicates_accumulate() {
        let mut engine = HighsEngine::new();
        let cols = [
            VarSpec::continuous(0.0, 1.0),
            VarSpec::continuous(0.0, 1.0),
        ];
        engine.reset(&cols, false).unwrap();
        engine.set_objective(
            &[
                (VariableId::new(0), 1.0),
                (VariableId::new(1), 2.0),
                (VariableId::new(0), 0.5),
            ],
            Direction::Minimize,
        );
        assert_eq!(engine.objective_coefficients(), vec![1.5, 2.0]);
    }

    #[test]
    fn test_out_of_range_objective_terms_are_skipped() {
        let mut engine = HighsEngine::new();
        engine
            .reset(&[VarSpec::continuous(0.0, 1.0)], false)
            .unwrap();
        engine.set_objective(
            &[(VariableId::new(0), 1.0), (VariableId::new(9), 3.0)],
            Direction::Minimize,
        );
        assert_eq!(engine.objective_coefficients(), vec![1.0]);
    }

    #[test]
    fn test_render_reflects_buffered_model() {
        let mut engine = HighsEngine::new();
        engine
            .reset(&[VarSpec::continuous(0.0, 10.0), VarSpec::binary()], false)
            .unwrap();
        let lhs = LinearExpr::var(VariableId::new(0)) + LinearExpr::var(VariableId::new(1));
        engine
            .add_row(&row(&lhs, &LinearExpr::from_constant(4.0)), RelOp::LessOrEqual)
            .unwrap();
        engine.set_objective(&[(VariableId::new(0), 1.0)], Direction::Maximize);

        let rendered = engine.render_model();
        assert!(rendered.contains("Max x0"));
        assert!(rendered.contains("x0 + x1 <= 4"));
        assert!(rendered.contains("Binary: x1"));
    }

    #[test]
    fn test_version_probe_is_well_formed() {
        if let Some(version) = highs_version() {
            assert!(!version.is_empty());
        }
    }
}
