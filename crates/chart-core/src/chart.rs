// File: crates/chart-core/src/chart.rs
// Summary: Chart builder collecting line plots and turning them into a script file or a run.

use std::path::{Path, PathBuf};

use crate::error::ScriptError;
use crate::options::ScriptOptions;
use crate::runner::{run_script, write_script, RunOutput};
use crate::script::render_script;
use crate::series::ChartDescriptor;

pub struct Chart {
    pub descriptors: Vec<ChartDescriptor>,
    pub options: ScriptOptions,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_options(ScriptOptions::default())
    }

    pub fn with_options(options: ScriptOptions) -> Self {
        Self { descriptors: Vec::new(), options }
    }

    pub fn add_descriptor(&mut self, desc: ChartDescriptor) {
        self.descriptors.push(desc);
    }

    /// Queue a named line plot of `values` compressed to `count` points.
    pub fn line_plot(&mut self, values: Vec<f64>, name: impl Into<String>, count: usize) {
        self.add_descriptor(ChartDescriptor::line(values, count).with_name(name));
    }

    /// Drop all queued plots; options are kept.
    pub fn clear(&mut self) {
        self.descriptors.clear();
    }

    pub fn len(&self) -> usize { self.descriptors.len() }

    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }

    pub fn render(&self) -> Result<String, ScriptError> {
        render_script(&self.descriptors, &self.options)
    }

    /// Render into a new numbered script file under `dir`.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ScriptError> {
        let script = self.render()?;
        write_script(dir.as_ref(), &script)
    }

    /// Write the script under `dir`, clear the queued plots and run the script
    /// with the configured interpreter.
    pub fn execute(&mut self, dir: impl AsRef<Path>) -> Result<(PathBuf, RunOutput), ScriptError> {
        let path = self.write_to(dir)?;
        self.clear();
        let output = run_script(&self.options.interpreter, &path)?;
        Ok((path, output))
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}
