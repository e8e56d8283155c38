// File: crates/chart-core/src/script.rs
// Summary: Render chart descriptors into a matplotlib script.
// Notes:
// - Each series of a line descriptor becomes `values = [...]` + `plt.plot(values)`.
// - Other kinds are skipped; the match over `SeriesType` stays exhaustive so a
//   new kind must be handled here before it compiles.

use log::{debug, warn};

use crate::emit::{to_python_array, to_python_str};
use crate::error::ScriptError;
use crate::options::ScriptOptions;
use crate::series::{ChartDescriptor, SeriesType};
use crate::types::SCRIPT_HEADER;

/// Render `descriptors` in order, ending with `plt.show()` or `plt.savefig(...)`.
pub fn render_script(descriptors: &[ChartDescriptor], opts: &ScriptOptions) -> Result<String, ScriptError> {
    let mut out = String::from(SCRIPT_HEADER);
    let mut labelled = false;

    for (index, desc) in descriptors.iter().enumerate() {
        match &desc.series_type {
            SeriesType::Line => {
                let compressed = desc.downsampled().map_err(|source| ScriptError::Downsample { index, source })?;
                for (series, values) in desc.values.iter().zip(&compressed) {
                    debug!("chart {index}: {} -> {} points", series.len(), values.len());

                    out.push_str(&format!("values = {}\n", to_python_array(values)));
                    match &desc.name {
                        Some(name) => {
                            out.push_str(&format!("plt.plot(values, label={})\n\n", to_python_str(name)));
                            labelled = true;
                        }
                        None => out.push_str("plt.plot(values)\n\n"),
                    }
                }
            }
            SeriesType::Candlestick | SeriesType::Bar | SeriesType::Histogram | SeriesType::Baseline => {
                debug!("chart {index}: no script output for `{}` charts, skipped", desc.series_type);
            }
            SeriesType::Unknown(kind) => {
                warn!("chart {index}: unknown chart type `{kind}`, skipped");
            }
        }
    }

    if labelled && opts.legend {
        out.push_str("plt.legend()\n");
    }
    match &opts.save_to {
        Some(path) => out.push_str(&format!("plt.savefig({})\n", to_python_str(&path.to_string_lossy()))),
        None => out.push_str("plt.show()\n"),
    }
    Ok(out)
}
