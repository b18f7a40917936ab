//! Engine error types.

/// Error type for engine-side failures.
///
/// Solve outcomes (infeasible, unbounded, limits) are never errors; they
/// travel as data inside an `EngineReport`. This enum covers the failures
/// that leave the engine without a usable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Engine failed to allocate or rebuild its model storage.
    Allocation(String),
    /// A row or objective referenced a variable that was never declared.
    InvalidVariableId { var_id: u32, declared: usize },
}

impl EngineError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Allocation(_) => "ENGINE_ALLOCATION",
            EngineError::InvalidVariableId { .. } => "VARIABLE_INVALID_ID",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Allocation(reason) => {
                write!(f, "[{}] Engine allocation failed: {}", self.code(), reason)
            }
            EngineError::InvalidVariableId { var_id, declared } => {
                write!(
                    f,
                    "[{}] Variable ID {} does not exist ({} declared)",
                    self.code(),
                    var_id,
                    declared
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
