//! Error types for the simulator

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// Caller violated an input precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SimulationError {
    /// Create invalid input error
    #[inline]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Check if error is a precondition violation
    #[inline]
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
