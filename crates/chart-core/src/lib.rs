// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports downsampling, descriptor loading and script generation.

pub mod chart;
pub mod descriptor;
pub mod downsample;
pub mod emit;
pub mod error;
pub mod options;
pub mod runner;
pub mod script;
pub mod series;
pub mod types;

pub use chart::Chart;
pub use descriptor::{load_csv_column, load_descriptors, parse_descriptors};
pub use downsample::{chunk_sizes, compress_by_mean};
pub use emit::{to_python_array, to_python_str};
pub use error::{DescriptorError, DownsampleError, RunError, ScriptError};
pub use options::ScriptOptions;
pub use runner::{run_script, write_script, RunOutput};
pub use script::render_script;
pub use series::{ChartDescriptor, SeriesType};
