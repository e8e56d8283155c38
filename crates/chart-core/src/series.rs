// File: crates/chart-core/src/series.rs
// Summary: Chart kinds and the chart descriptor model fed to the script renderer.
// Notes:
// - Kind strings outside the known set are kept as `Unknown` so rendering can
//   skip them while every known kind stays covered by an exhaustive match.

use std::fmt;

use crate::downsample::compress_by_mean;
use crate::error::DownsampleError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Candlestick,
    Bar,         // OHLC bar
    Histogram,
    Baseline,
    Unknown(String),
}

impl SeriesType {
    /// Parse a descriptor `type` string, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => SeriesType::Line,
            "candlestick" | "candles" => SeriesType::Candlestick,
            "bar" => SeriesType::Bar,
            "histogram" | "hist" => SeriesType::Histogram,
            "baseline" => SeriesType::Baseline,
            _ => SeriesType::Unknown(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeriesType::Line => "line",
            SeriesType::Candlestick => "candlestick",
            SeriesType::Bar => "bar",
            SeriesType::Histogram => "histogram",
            SeriesType::Baseline => "baseline",
            SeriesType::Unknown(s) => s,
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chart to emit: its kind, optional label, value series and target count.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDescriptor {
    pub series_type: SeriesType,
    pub name: Option<String>,
    pub values: Vec<Vec<f64>>,
    pub count: usize,
}

impl ChartDescriptor {
    pub fn new(series_type: SeriesType, count: usize) -> Self {
        Self { series_type, name: None, values: Vec::new(), count }
    }

    /// Line chart over a single series.
    pub fn line(values: Vec<f64>, count: usize) -> Self {
        Self { series_type: SeriesType::Line, name: None, values: vec![values], count }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append another value series.
    pub fn with_series(mut self, values: Vec<f64>) -> Self {
        self.values.push(values);
        self
    }

    /// Every value series compressed to at most `count` points.
    pub fn downsampled(&self) -> Result<Vec<Vec<f64>>, DownsampleError> {
        self.values.iter().map(|v| compress_by_mean(v, self.count)).collect()
    }
}
