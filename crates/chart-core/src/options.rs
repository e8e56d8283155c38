// File: crates/chart-core/src/options.rs
// Summary: Script generation and execution settings with defaults, JSON file and env overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScriptError;
use crate::types::{DEFAULT_COUNT, DEFAULT_INTERPRETER, INTERPRETER_ENV};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptOptions {
    /// Target count for descriptors that do not set one.
    pub default_count: usize,
    /// Emit `plt.legend()` when any plot is labelled.
    pub legend: bool,
    /// Save the figure to this path instead of opening a window.
    pub save_to: Option<PathBuf>,
    /// Python interpreter used to run scripts.
    pub interpreter: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            legend: true,
            save_to: None,
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

impl ScriptOptions {
    /// Load options from a JSON object; absent fields keep their defaults.
    /// A `default_count` of 0 is rejected here rather than at render time.
    pub fn from_json_file(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(ScriptError::io(path))?;
        let opts: Self = serde_json::from_str(&text)
            .map_err(|source| ScriptError::Json { path: path.to_path_buf(), source })?;
        if opts.default_count == 0 {
            return Err(ScriptError::InvalidDefaultCount { path: path.to_path_buf() });
        }
        Ok(opts)
    }

    /// Apply `CHART_SCRIPT_PYTHON` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bin) = std::env::var(INTERPRETER_ENV) {
            if !bin.trim().is_empty() {
                self.interpreter = bin.trim().to_string();
            }
        }
        self
    }
}
