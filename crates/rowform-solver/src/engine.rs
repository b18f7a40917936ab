//! The narrow interface a solve engine exposes to the model adapter.

use rowform_expr::{CanonicalRow, RelOp, VariableId};

use crate::error::EngineError;
use crate::status::SolveStatus;
use crate::types::{Direction, VarSpec};

/// Raw outcome of one engine solve, before decoding.
#[derive(Debug, Clone)]
pub struct EngineReport {
    /// Classified status.
    pub status: SolveStatus,
    /// Engine status code, verbatim.
    pub status_code: i32,
    /// Best-effort human-readable outcome text. Not contractually stable.
    pub message: String,
    /// Reported MIP gap (0.0 when not meaningful).
    pub gap: f64,
    /// Reported objective value (meaningful only when a solution exists).
    pub objective: f64,
    /// Column values in declaration order; may be empty when the engine
    /// holds no solution.
    pub values: Vec<f64>,
}

impl EngineReport {
    /// Report for an outcome that carries no solution vector.
    pub fn without_solution(
        status: SolveStatus,
        status_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            status_code,
            message: message.into(),
            gap: 0.0,
            objective: 0.0,
            values: Vec::new(),
        }
    }
}

/// Interface between the model adapter and a solve engine.
///
/// Implementations own whatever native state the engine needs. The adapter
/// drives them through a fixed lifecycle: `reset` rebuilds the variable set
/// from scratch, rows and the objective accumulate against it, and
/// `finish_rows` closes the bulk loading phase before `solve`.
pub trait Engine {
    /// Engine identifier for diagnostics.
    fn name(&self) -> &'static str;

    /// Discard any existing model and rebuild it for the given variables.
    ///
    /// Rows and objective loaded before the reset do not survive it.
    /// `verbose` configures the engine's own console output.
    fn reset(&mut self, vars: &[VarSpec], verbose: bool) -> Result<(), EngineError>;

    /// Append one constraint row: `entries (op) constant`.
    fn add_row(&mut self, row: &CanonicalRow, op: RelOp) -> Result<(), EngineError>;

    /// Replace the objective. Duplicate ids follow the engine's own
    /// accumulation semantics.
    fn set_objective(&mut self, terms: &[(VariableId, f64)], direction: Direction);

    /// Wall-clock bound for subsequent solves, in seconds. An infinite
    /// bound lifts any previously forwarded limit.
    fn set_time_limit(&mut self, seconds: f64);

    /// Close the bulk row-loading phase. Idempotent.
    fn finish_rows(&mut self);

    /// Run the solve to completion (or its configured limit). Outcomes are
    /// data; this never fails.
    fn solve(&mut self) -> EngineReport;

    /// Opaque diagnostic rendering of the loaded model.
    fn render_model(&self) -> String;
}
