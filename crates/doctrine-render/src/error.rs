//! Error types for document rendering

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Caller violated an input precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RenderError {
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

/// Reject strings that are empty after trimming
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), RenderError> {
    if value.trim().is_empty() {
        return Err(RenderError::invalid_input(format!("{field} must not be blank")));
    }
    Ok(())
}
