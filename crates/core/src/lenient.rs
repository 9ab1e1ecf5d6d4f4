//! Forgiving Field Coercion
//!
//! Request bodies arrive from a browser form and are never rejected for
//! their content. These helpers are plugged into `#[serde(deserialize_with)]`
//! and turn anything unusable into `None` (or an empty list) so the caller
//! can fall back to a default.
//!
//! Alternative field spellings are resolved on the raw map before
//! deserializing. Serde's own `alias` rejects a body that carries two
//! spellings of one field, which would throw away every other field too.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A request body that never fails on its content.
pub trait Lenient: DeserializeOwned + Default {
    /// `(canonical, alternatives)` pairs. When several spellings are present
    /// the canonical key wins, then the alternatives in order.
    const ALIASES: &'static [(&'static str, &'static [&'static str])] = &[];
}

/// Deserializes a body into `T`, falling back to `T::default()` when the body
/// is not a JSON object or does not fit the shape of `T`.
pub fn from_value_or_default<T: Lenient>(value: Value) -> T {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            debug!(kind = value_kind(&other), "Request body is not an object, using defaults");
            return T::default();
        }
    };
    resolve_aliases(&mut map, T::ALIASES);

    serde_json::from_value(Value::Object(map)).unwrap_or_else(|err| {
        warn!(error = %err, "Request body did not match the expected shape, using defaults");
        T::default()
    })
}

/// Moves the first spelling present for each field to its canonical key and
/// drops the rest.
pub fn resolve_aliases(map: &mut Map<String, Value>, aliases: &[(&str, &[&str])]) {
    for (canonical, alternatives) in aliases {
        let mut chosen = map.remove(*canonical);
        for alternative in alternatives.iter() {
            if let Some(value) = map.remove(*alternative) {
                if chosen.is_none() {
                    chosen = Some(value);
                } else {
                    debug!(
                        field = %canonical,
                        ignored = %alternative,
                        "Dropping duplicate field spelling"
                    );
                }
            }
        }
        if let Some(value) = chosen {
            map.insert((*canonical).to_string(), value);
        }
    }
}

/// A trimmed, non-empty string. Numbers and booleans are stringified.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// A non-negative count. Accepts integers, floats (truncated) and numeric strings.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

/// A finite number. Accepts numbers and numeric strings.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite()))
}

/// A list of objects. Non-array values become an empty list and elements
/// that are not objects are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .filter(Value::is_object)
            .map(from_value_or_default::<T>)
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn count_from_value(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?
        }
        _ => return None,
    };
    u32::try_from(n).ok()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
