// File: crates/chart-core/src/runner.rs
// Summary: Write generated scripts to numbered files and run them with a Python interpreter.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::{debug, info};

use crate::error::{RunError, ScriptError};
use crate::types::{MAX_SCRIPT_FILES, SCRIPT_PREFIX};

/// Captured result of a successful interpreter run.
#[derive(Debug)]
pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Write `script` to the first free `pltNNNN.py` in `dir`, creating `dir` if needed.
/// Existing files are never overwritten.
pub fn write_script(dir: &Path, script: &str) -> Result<PathBuf, ScriptError> {
    std::fs::create_dir_all(dir).map_err(ScriptError::io(dir))?;

    for n in 0..MAX_SCRIPT_FILES {
        let path = dir.join(format!("{SCRIPT_PREFIX}{n:04}.py"));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                write_or_remove(&path, file, script)?;
                info!("wrote {} ({} bytes)", path.display(), script.len());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(ScriptError::Io { path, source: e }),
        }
    }
    Err(ScriptError::NoFreeName { dir: dir.to_path_buf() })
}

/// Write `script` through `out`; on failure remove `path` so no truncated script is left.
fn write_or_remove(path: &Path, mut out: impl Write, script: &str) -> Result<(), ScriptError> {
    if let Err(source) = out.write_all(script.as_bytes()).and_then(|_| out.flush()) {
        drop(out);
        std::fs::remove_file(path).ok();
        return Err(ScriptError::Io { path: path.to_path_buf(), source });
    }
    Ok(())
}

/// Run `interpreter <path>` to completion. A non-zero exit is an error carrying stderr.
pub fn run_script(interpreter: &str, path: &Path) -> Result<RunOutput, RunError> {
    debug!("running {interpreter} {}", path.display());
    let output = Command::new(interpreter)
        .arg(path)
        .output()
        .map_err(|source| RunError::Spawn { interpreter: interpreter.to_string(), source })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(RunError::Failed {
            interpreter: interpreter.to_string(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        });
    }
    info!("{interpreter} {} finished: {}", path.display(), output.status);
    Ok(RunOutput { status: output.status, stdout, stderr })
}
