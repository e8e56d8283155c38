// File: crates/chart-core/src/emit.rs
// Summary: Python literal emission for float arrays and label strings.

/// Python text for a single float.
///
/// Finite values use the shortest text that parses back to the same `f64`
/// and always carry a fractional part or exponent. Non-finite values map to
/// numpy constants; the script header imports numpy as `np`.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "np.nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "np.inf".to_string() } else { "-np.inf".to_string() }
    } else {
        format!("{v:?}")
    }
}

/// Python list literal, e.g. `[1.5, 3.5, 5.5]`.
pub fn to_python_array(values: &[f64]) -> String {
    let items = values.iter().map(|&v| format_value(v)).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// Single-quoted Python string literal.
pub fn to_python_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
