//! The model adapter: variable registry, constraint canonicalization, and
//! solve orchestration over a pluggable engine.

use rowform_expr::{CanonicalRow, LinearExpr, RelOp, VariableId};
use rowform_solver::{Direction, Engine, Solution, SolverConfig, VarSpec};

use crate::error::ModelError;

/// A model being built against one solve engine.
///
/// The protocol is stateful: [`declare`](Model::declare) must run first and
/// rebuilding the variable set through it discards every previously loaded
/// row and objective. Constraints and the objective accumulate against the
/// current declaration; [`optimize`](Model::optimize) closes the loading
/// phase, runs the engine, and decodes the outcome.
#[derive(Debug)]
pub struct Model<E: Engine> {
    engine: E,
    config: SolverConfig,
    variables: Vec<VarSpec>,
    row_count: usize,
    declared: bool,
}

impl<E: Engine> Model<E> {
    /// Wrap an engine with default configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, SolverConfig::new())
    }

    /// Wrap an engine with an explicit configuration.
    pub fn with_config(engine: E, config: SolverConfig) -> Self {
        Self {
            engine,
            config,
            variables: Vec::new(),
            row_count: 0,
            declared: false,
        }
    }

    /// Declare the variable set, discarding any existing model.
    ///
    /// Ids are assigned densely in slice order, starting at zero. There is
    /// no incremental declaration: every call rebuilds the engine model
    /// from scratch, dropping previously loaded rows and objective. The
    /// engine's console verbosity is configured here from the logging flag
    /// as it stands at this moment.
    pub fn declare(&mut self, specs: &[VarSpec]) -> Result<(), ModelError> {
        let verbose = self.config.verbose();
        self.engine.reset(specs, verbose)?;
        self.variables = specs.to_vec();
        self.row_count = 0;
        self.declared = true;
        tracing::debug!(
            component = "model",
            operation = "declare",
            status = "success",
            engine = self.engine.name(),
            variables = specs.len(),
            verbose,
            "Declared variable set"
        );
        Ok(())
    }

    /// Declare `count` copies of one variable spec.
    pub fn declare_uniform(&mut self, count: usize, spec: VarSpec) -> Result<(), ModelError> {
        self.declare(&vec![spec; count])
    }

    /// Append the constraint `lhs (sense) rhs`.
    ///
    /// Both sides may carry terms and constants; they collapse into one
    /// canonical row before reaching the engine. The sense character must
    /// be `'='`, `'<'` or `'>'` (the latter two are non-strict); anything
    /// else is rejected before the engine is touched.
    pub fn add_constraint(
        &mut self,
        lhs: &LinearExpr,
        rhs: &LinearExpr,
        sense: char,
    ) -> Result<(), ModelError> {
        let Some(op) = RelOp::from_char(sense) else {
            tracing::warn!(
                component = "model",
                operation = "add_constraint",
                status = "error",
                sense = %sense,
                "Rejected constraint with unknown sense"
            );
            return Err(ModelError::InvalidSense { sense });
        };

        let row = CanonicalRow::from_sides(lhs, rhs);
        self.engine.add_row(&row, op)?;
        self.row_count += 1;
        tracing::trace!(
            component = "model",
            operation = "add_constraint",
            status = "success",
            sense = op.as_str(),
            entries = row.len(),
            constant = row.constant(),
            "Canonicalized constraint row"
        );
        Ok(())
    }

    /// Submit the objective row.
    ///
    /// Terms are forwarded as-is, without merging; duplicate ids follow the
    /// engine's accumulation semantics. The expression's constant is
    /// accepted and has no effect on the reported objective value. The last
    /// call wins.
    pub fn set_objective(&mut self, expr: &LinearExpr, direction: Direction) {
        self.engine.set_objective(expr.terms(), direction);
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            direction = direction.as_str(),
            terms = expr.terms().len(),
            "Submitted objective row"
        );
    }

    /// Enable or disable engine console output.
    ///
    /// The flag reaches the engine at the next [`declare`](Model::declare);
    /// the diagnostic model dump at [`optimize`](Model::optimize) consults
    /// it live.
    pub fn set_logging(&mut self, enabled: bool) {
        self.config.log_to_console = Some(enabled);
        tracing::debug!(
            component = "model",
            operation = "set_logging",
            status = "success",
            enabled,
            "Updated console logging flag"
        );
    }

    /// Wall-clock bound for each solve, in seconds. Non-positive values
    /// lift the limit.
    pub fn set_time_limit(&mut self, seconds: f64) {
        self.config.time_limit = Some(seconds);
        tracing::debug!(
            component = "model",
            operation = "set_time_limit",
            status = "success",
            seconds,
            "Updated time limit"
        );
    }

    /// Run the solve and decode the outcome.
    ///
    /// Closes the engine's bulk row-loading phase, forwards the effective
    /// time bound (infinite when no positive limit is set, so a lifted
    /// limit reaches the engine too), solves, and decodes the raw report.
    /// Solve outcomes are
    /// data: infeasible, unbounded and limit-reached runs all come back as
    /// a [`Solution`] whose value vector has exactly one entry per declared
    /// variable. The only error here is invoking this before any
    /// declaration. Repeated calls re-solve the same model.
    pub fn optimize(&mut self) -> Result<Solution, ModelError> {
        if !self.declared {
            tracing::warn!(
                component = "model",
                operation = "optimize",
                status = "error",
                "Optimize called before any variable declaration"
            );
            return Err(ModelError::EmptyModel);
        }

        self.engine.finish_rows();

        if self.config.verbose() {
            tracing::debug!(
                component = "model",
                operation = "optimize",
                status = "start",
                engine = self.engine.name(),
                model = %self.engine.render_model(),
                "Model loaded for solve"
            );
        }

        let bound = self.config.effective_time_limit().unwrap_or(f64::INFINITY);
        self.engine.set_time_limit(bound);

        let report = self.engine.solve();
        let solution = Solution::from_report(report, self.variables.len());
        tracing::debug!(
            component = "model",
            operation = "optimize",
            status = solution.status().as_str(),
            engine = self.engine.name(),
            status_code = solution.status_code(),
            objective = solution.objective(),
            gap = solution.gap(),
            "Solve completed"
        );
        Ok(solution)
    }

    /// Number of variables in the current declaration.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows loaded since the last declaration.
    pub fn num_constraints(&self) -> usize {
        self.row_count
    }

    /// Spec of one declared variable.
    pub fn variable(&self, var_id: VariableId) -> Option<&VarSpec> {
        self.variables.get(var_id.inner() as usize)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
