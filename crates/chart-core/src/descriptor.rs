// File: crates/chart-core/src/descriptor.rs
// Summary: Build chart descriptors from JSON records or a single numeric CSV column.
//
// Expected JSON schema:
//
// [
//   { "type": "line", "name": "loss", "values": [[0.9, 0.7, ...]], "count": 500 },
//   { "type": "line", "values": [1.0, 2.0, 3.0] },
//   { "type": "bar", "values": [...] }
// ]
//
// A flat `values` array is a single series. `count` falls back to the
// configured default. Only line descriptors have their data validated; other
// kinds are kept with no values so the renderer can skip them.

use std::path::Path;

use log::debug;
use serde_json::{Map, Value as JsonValue};

use crate::error::{DescriptorError, ScriptError};
use crate::series::{ChartDescriptor, SeriesType};

/// Parse a JSON array of descriptor objects.
pub fn parse_descriptors(root: &JsonValue, default_count: usize) -> Result<Vec<ChartDescriptor>, DescriptorError> {
    let records = root
        .as_array()
        .ok_or(DescriptorError::NotAnArray { found: json_kind(root) })?;

    records
        .iter()
        .enumerate()
        .map(|(index, rec)| parse_descriptor(index, rec, default_count))
        .collect()
}

fn parse_descriptor(index: usize, rec: &JsonValue, default_count: usize) -> Result<ChartDescriptor, DescriptorError> {
    let obj = rec.as_object().ok_or_else(|| DescriptorError::TypeMismatch {
        index,
        field: "descriptor".to_string(),
        expected: "object",
        found: json_kind(rec).to_string(),
    })?;

    let kind = match obj.get("type") {
        None | Some(JsonValue::Null) => return Err(DescriptorError::MissingField { index, field: "type" }),
        Some(JsonValue::String(s)) => SeriesType::parse(s),
        Some(other) => return Err(mismatch(index, "type", "string", other)),
    };

    let mut desc = ChartDescriptor::new(kind, default_count);

    if desc.series_type != SeriesType::Line {
        debug!("descriptor {index}: `{}` data not validated", desc.series_type);
        desc.name = obj.get("name").and_then(JsonValue::as_str).map(str::to_string);
        return Ok(desc);
    }

    desc.name = match obj.get("name") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(other) => return Err(mismatch(index, "name", "string", other)),
    };
    desc.count = parse_count(index, obj, default_count)?;
    desc.values = parse_values(index, obj)?;
    Ok(desc)
}

fn parse_count(index: usize, obj: &Map<String, JsonValue>, default_count: usize) -> Result<usize, DescriptorError> {
    match obj.get("count") {
        None | Some(JsonValue::Null) => Ok(default_count),
        Some(v) => {
            let count = v.as_i64().ok_or_else(|| mismatch(index, "count", "integer", v))?;
            if count <= 0 {
                return Err(DescriptorError::InvalidCount { index, count });
            }
            Ok(count as usize)
        }
    }
}

fn parse_values(index: usize, obj: &Map<String, JsonValue>) -> Result<Vec<Vec<f64>>, DescriptorError> {
    let items = match obj.get("values") {
        None | Some(JsonValue::Null) => return Err(DescriptorError::MissingField { index, field: "values" }),
        Some(JsonValue::Array(items)) => items,
        Some(other) => return Err(mismatch(index, "values", "array", other)),
    };

    // Nested arrays are several series; anything else is one flat series.
    if items.first().is_some_and(JsonValue::is_array) {
        items
            .iter()
            .enumerate()
            .map(|(s, series)| match series.as_array() {
                Some(arr) => numbers(index, &format!("values[{s}]"), arr),
                None => Err(mismatch(index, &format!("values[{s}]"), "array", series)),
            })
            .collect()
    } else {
        Ok(vec![numbers(index, "values", items)?])
    }
}

fn numbers(index: usize, field: &str, arr: &[JsonValue]) -> Result<Vec<f64>, DescriptorError> {
    arr.iter()
        .enumerate()
        .map(|(i, v)| v.as_f64().ok_or_else(|| mismatch(index, &format!("{field}[{i}]"), "number", v)))
        .collect()
}

fn mismatch(index: usize, field: &str, expected: &'static str, found: &JsonValue) -> DescriptorError {
    DescriptorError::TypeMismatch {
        index,
        field: field.to_string(),
        expected,
        found: json_kind(found).to_string(),
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Read a `.json` descriptor file.
pub fn load_descriptors(path: &Path, default_count: usize) -> Result<Vec<ChartDescriptor>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(ScriptError::io(path))?;
    let root: JsonValue = serde_json::from_str(&text)
        .map_err(|source| ScriptError::Json { path: path.to_path_buf(), source })?;
    let descriptors = parse_descriptors(&root, default_count)?;
    debug!("loaded {} descriptors from {}", descriptors.len(), path.display());
    Ok(descriptors)
}

/// Build one line descriptor, named after the column, from a CSV column.
///
/// The header is matched case-insensitively. Empty or non-numeric cells are
/// reported as type mismatches with their 0-based data row.
pub fn load_csv_column(path: &Path, column: &str, count: usize) -> Result<ChartDescriptor, ScriptError> {
    let csv_err = |source: csv::Error| ScriptError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let want = column.to_lowercase();
    let col = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .position(|h| h.to_lowercase() == want)
        .ok_or_else(|| DescriptorError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(csv_err)?;
        let cell = rec.get(col).unwrap_or("");
        let v = cell.parse::<f64>().map_err(|_| DescriptorError::TypeMismatch {
            index: 0,
            field: format!("{column}[{row}]"),
            expected: "number",
            found: format!("`{cell}`"),
        })?;
        values.push(v);
    }
    debug!("loaded {} values from column `{column}` of {}", values.len(), path.display());

    Ok(ChartDescriptor::line(values, count).with_name(column))
}
