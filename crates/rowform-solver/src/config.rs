//! Solve configuration held by the model adapter.

/// Adapter-level configuration applied around each solve.
///
/// `log_to_console` is pushed down to the engine when the variable set is
/// (re)declared; `time_limit` is forwarded right before each solve.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Time limit in seconds. `None` or a non-positive value means no limit.
    pub time_limit: Option<f64>,
    /// Log engine output to console. `None` uses the engine default (quiet).
    pub log_to_console: Option<bool>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Enable or disable console logging.
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = Some(enabled);
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.time_limit.is_none() && self.log_to_console.is_none()
    }

    /// Whether console logging is enabled.
    pub fn verbose(&self) -> bool {
        self.log_to_console.unwrap_or(false)
    }

    /// The time limit to forward, if one is set and positive.
    pub fn effective_time_limit(&self) -> Option<f64> {
        self.time_limit.filter(|limit| *limit > 0.0)
    }
}
