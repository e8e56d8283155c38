// File: crates/chart-core/src/error.rs
// Summary: Typed errors for downsampling, descriptor parsing, script output and interpreter runs.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Downsampling failure. The only invalid input is a zero target count.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DownsampleError {
    #[error("invalid argument: target count must be at least 1")]
    InvalidCount,
}

/// Malformed chart descriptor input (JSON records or CSV columns).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("expected a top-level array of chart descriptors, found {found}")]
    NotAnArray { found: &'static str },

    #[error("descriptor {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("descriptor {index}: `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("descriptor {index}: invalid argument: count must be at least 1, got {count}")]
    InvalidCount { index: usize, count: i64 },

    #[error("column `{0}` not found in CSV header")]
    MissingColumn(String),
}

/// Failure launching or running the Python interpreter on a generated script.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch `{interpreter}`: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{interpreter}` exited with {status}: {stderr}")]
    Failed {
        interpreter: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Top-level error for rendering, loading and writing scripts.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("chart {index}: {source}")]
    Downsample {
        index: usize,
        #[source]
        source: DownsampleError,
    },

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid argument in {}: default_count must be at least 1", .path.display())]
    InvalidDefaultCount { path: PathBuf },

    #[error("no free script file name left in {}", .dir.display())]
    NoFreeName { dir: PathBuf },
}

impl ScriptError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScriptError::Io { path, source }
    }
}
