//! Error types for the doctrine engine
//!
//! Covers:
//! - Input precondition violations surfaced by the generators
//! - Record store lookups
//! - Export file writes
//! - Configuration loading

use crate::store::RecordKind;
use doctrine_model::ModelError;
use doctrine_render::RenderError;
use doctrine_simulator::SimulationError;
use std::path::PathBuf;

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Caller violated an input precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Vocabulary parsing failed
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Scenario simulation failed
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// Document rendering failed
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    /// Record store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Export failure
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Create invalid input error
    #[inline]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Check if error is a caller precondition violation, at any layer
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::Model(_) => true,
            Self::Simulation(e) => e.is_invalid_input(),
            Self::Render(e) => e.is_invalid_input(),
            Self::Store(_) | Self::Export(_) | Self::Config(_) => false,
        }
    }

    /// Check if error is a missing record
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound { .. }))
    }
}

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record of this kind with this id
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// Backend rejected the operation
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create not-found error
    #[inline]
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filename is empty or would resolve outside the export directory
    #[error("invalid export filename: '{0}'")]
    InvalidFilename(String),

    /// IO error during write
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unknown export format label
    #[error("unknown export format: '{0}' (expected txt or md)")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_detected_through_layers() {
        assert!(EngineError::invalid_input("x").is_invalid_input());
        assert!(EngineError::from(SimulationError::invalid_input("empty")).is_invalid_input());
        assert!(EngineError::from(RenderError::invalid_input("blank")).is_invalid_input());
        assert!(EngineError::from(ModelError::UnknownDraftMode("x".into())).is_invalid_input());
        assert!(!EngineError::from(StoreError::Unavailable("down".into())).is_invalid_input());
    }

    #[test]
    fn not_found_display() {
        let err = EngineError::from(StoreError::not_found(RecordKind::Scenario, "scenario-1"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "store error: scenario not found: scenario-1");
    }

    #[test]
    fn export_error_display() {
        let err = ExportError::InvalidFilename("..".to_string());
        assert!(err.to_string().contains("invalid export filename"));
    }
}
