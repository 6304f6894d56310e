//! Field normalisation shared by every source adapter.
//!
//! Adapters only map their raw shape onto the model; trimming, coordinate
//! parsing, and time padding happen here so every source behaves the same.
//! Unparseable coordinates become `NaN` and are dropped later by the stores.

use crate::types::WindSpeed;
use serde_json::Value;

/// Trimmed owned copy of a text field.
pub fn trim_field(raw: &str) -> String {
    raw.trim().to_string()
}

/// Text form of a JSON scalar: strings are trimmed, numbers printed,
/// anything else is empty.
pub fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => trim_field(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coordinate from a JSON number or numeric string; `NaN` when neither.
pub fn coordinate(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coordinate_str(s),
        _ => f64::NAN,
    }
}

/// Coordinate from text. Accepts plain decimals (`-80.3`) and HURDAT2
/// hemisphere notation (`28.0N`, `94.8W`). `NaN` when unparseable.
pub fn coordinate_str(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<f64>() {
        return v;
    }
    hemisphere_coordinate(raw).unwrap_or(f64::NAN)
}

/// `28.0N` → 28.0, `94.8W` → -94.8. Southern and western values are negated.
pub fn hemisphere_coordinate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let direction = raw.chars().last()?;
    let magnitude: f64 = raw[..raw.len() - direction.len_utf8()].trim().parse().ok()?;
    match direction.to_ascii_uppercase() {
        'N' | 'E' => Some(magnitude),
        'S' | 'W' => Some(-magnitude),
        _ => None,
    }
}

/// Wind speed passed through as given: numbers stay numbers, text is
/// trimmed, anything else becomes empty text.
pub fn wind_speed(value: &Value) -> WindSpeed {
    match value {
        Value::Number(n) => n.as_f64().map_or_else(|| WindSpeed::Text(n.to_string()), WindSpeed::Knots),
        Value::String(s) => WindSpeed::Text(trim_field(s)),
        _ => WindSpeed::Text(String::new()),
    }
}

/// Bring longitudes recorded on a 0–360 scale back into −180..180.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else {
        longitude
    }
}

/// Left-pad an all-digit time to four characters (`930` → `0930`).
///
/// Tabular exports lose leading zeros when the column was read as an
/// integer; anything that is not purely digits is returned trimmed.
pub fn pad_time(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.is_empty() && raw.len() < 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{raw:0>4}")
    } else {
        raw.to_string()
    }
}

/// Year as an integer, for comparisons. `None` for non-numeric years.
pub fn year_number(year: &str) -> Option<i32> {
    year.trim().parse().ok()
}
