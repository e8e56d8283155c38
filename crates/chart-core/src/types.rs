// File: crates/chart-core/src/types.rs
// Summary: Shared constants (default target count, interpreter, script naming).

/// Default number of points a line series is compressed to.
pub const DEFAULT_COUNT: usize = 1000;

/// Interpreter used to run generated scripts when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Environment variable overriding the interpreter.
pub const INTERPRETER_ENV: &str = "CHART_SCRIPT_PYTHON";

/// Generated scripts are named `<prefix><NNNN>.py`.
pub const SCRIPT_PREFIX: &str = "plt";

/// Upper bound on numbered script files probed in one output directory.
pub const MAX_SCRIPT_FILES: usize = 10_000;

/// Preamble of every generated script.
pub const SCRIPT_HEADER: &str = "import matplotlib.pyplot as plt\nimport numpy as np\n\n";
