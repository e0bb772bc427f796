//! Error types for the favicon pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that abort a favicon generation run.
///
/// Every variant is fatal: the CLI reports it and exits with status 1.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FaviconError {
    /// The conversion capability is not installed or not reachable
    #[error("{tool} is not installed.\n{hint}")]
    MissingDependency {
        /// Human-readable tool name (e.g. "ImageMagick")
        tool: String,
        /// Installation hint shown to the operator
        hint: String,
    },

    /// The source SVG does not exist
    #[error("{} not found", .0.display())]
    MissingInput(PathBuf),

    /// A single conversion step failed
    #[error("Failed to generate {}: {diagnostic}", .output.display())]
    ConversionFailure {
        /// Output file the step was producing
        output: PathBuf,
        /// Tool diagnostic output, or the exit status when there was none
        diagnostic: String,
    },

    /// Filesystem error outside of the conversion tool
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FaviconError {
    /// Build a conversion failure for `output` with the given diagnostic text.
    pub fn conversion(output: impl Into<PathBuf>, diagnostic: impl Into<String>) -> Self {
        FaviconError::ConversionFailure { output: output.into(), diagnostic: diagnostic.into() }
    }

    /// Short machine-friendly category name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FaviconError::MissingDependency { .. } => "missing_dependency",
            FaviconError::MissingInput(_) => "missing_input",
            FaviconError::ConversionFailure { .. } => "conversion_failure",
            FaviconError::Io(_) => "io_error",
            FaviconError::Config(_) => "config_error",
        }
    }
}
