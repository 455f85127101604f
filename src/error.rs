use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations caught before any integration step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid {name}: {value} ({constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("convergence study needs at least one step size")]
    NoStepSizes,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SimulationError),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported plot format '{0}' (expected .png or .svg)")]
    UnsupportedFormat(String),

    /// Backend failures are flattened to text since plotters' error type is
    /// generic over the backend.
    #[error("failed to render plot: {0}")]
    Render(String),
}

impl PlotError {
    pub(crate) fn render<E: std::error::Error>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}
