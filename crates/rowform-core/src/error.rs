//! Model error types.

use rowform_solver::EngineError;

/// Errors that can occur during model operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Optimize was invoked before any variable declaration
    EmptyModel,
    /// Constraint sense character is not one of '=', '<', '>'
    InvalidSense { sense: char },
    /// The engine rejected an operation or lost its model
    Engine(EngineError),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::EmptyModel => "MODEL_EMPTY",
            ModelError::InvalidSense { .. } => "CONSTRAINT_INVALID_SENSE",
            ModelError::Engine(err) => err.code(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            ModelError::InvalidSense { sense } => write!(
                f,
                "[{}] Constraint sense '{}' is not one of '=', '<', '>'",
                self.code(),
                sense
            ),
            ModelError::Engine(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<EngineError> for ModelError {
    fn from(err: EngineError) -> Self {
        ModelError::Engine(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ModelError;
    use rowform_solver::EngineError;

    #[test]
    fn test_error_display_empty_model() {
        let msg = format!("{}", ModelError::EmptyModel);
        assert!(msg.contains("MODEL_EMPTY"));
        assert!(msg.contains("no variables"));
    }

    #[test]
    fn test_error_display_invalid_sense() {
        let msg = format!("{}", ModelError::InvalidSense { sense: '?' });
        assert!(msg.contains("CONSTRAINT_INVALID_SENSE"));
        assert!(msg.contains('?'));
    }

    #[test]
    fn test_engine_errors_keep_their_code() {
        let err = ModelError::from(EngineError::Allocation("native handle".to_string()));
        assert_eq!(err.code(), "ENGINE_ALLOCATION");
        assert!(format!("{}", err).contains("ENGINE_ALLOCATION"));
    }
}
