//! Serialize a [`RequestModel`] as an HTTPie command line.

use serde_json::Value;

use crate::request::{RequestData, RequestModel, DEFAULT_METHOD};

/// Program name placed at the front of the rendered command.
pub const TARGET_COMMAND: &str = "http";

/// Render `model` as an `http ...` command.
pub fn render(model: &RequestModel) -> String {
    render_with(model, TARGET_COMMAND)
}

/// Render `model` with a custom program name (e.g. `https` or `xh`).
///
/// Tokens come out in a fixed order: program, method (omitted for GET),
/// URL (even when empty), headers, then body items.
pub fn render_with(model: &RequestModel, program: &str) -> String {
    let mut parts: Vec<String> = vec![program.to_string()];

    if model.method != DEFAULT_METHOD {
        parts.push(model.method.clone());
    }

    parts.push(model.url.clone().unwrap_or_default());

    for (name, value) in model.headers.iter() {
        parts.push(format!("{}:\"{}\"", name, value.replace('"', "\\\"")));
    }

    if let Some(data) = &model.data {
        push_data(&mut parts, data);
    }

    parts.join(" ")
}

/// Largest integer a JSON consumer can hold exactly in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn push_data(parts: &mut Vec<String>, data: &RequestData) {
    if is_blank(data) {
        return;
    }
    match data {
        RequestData::Json {
            value: Value::Object(fields),
            ..
        } => {
            for (key, value) in fields {
                // Serializing a Value cannot fail.
                let encoded = serde_json::to_string(&integral_numbers(value)).unwrap_or_default();
                parts.push(format!("{}={}", key, encoded));
            }
        }
        other => parts.push(format!("@data='{}'", other.raw_text())),
    }
}

/// Bodies that produce no data item: empty text and the JSON values
/// `null`, `false`, `0` and `""`.
fn is_blank(data: &RequestData) -> bool {
    match data {
        RequestData::Raw(raw) => raw.is_empty(),
        RequestData::Json { value, .. } => match value {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        },
    }
}

/// Rewrite floats with no fractional part (`1.0`, `1e2`) as integers so they
/// encode as `1` and `100`.
fn integral_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), integral_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
