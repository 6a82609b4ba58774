//! Helpers for reading and checking simulation parameters.
//!
//! The `param_*` readers fall back to the supplied default only when a key
//! is missing or `null`. A key that is present with the wrong JSON type, a
//! fraction or a negative count is reported as
//! [`SimError::InvalidParameter`] naming the key. Domain checks happen
//! afterwards in `require_*`.

use serde_json::Value;

use crate::error::SimError;

/// The value under `name`, or `None` when it is missing or `null`.
fn present<'a>(params: &'a Value, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

/// Extracts an `f64` from `params[name]`, returning `default` if missing.
///
/// Integers are accepted and widened. Any other JSON type is an error.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, SimError> {
    match present(params, name) {
        None => Ok(default),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| SimError::invalid(name, format!("expected a number, got {v}"))),
    }
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing.
///
/// Only non-negative integers qualify; `2.5` or `-1` are errors.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, SimError> {
    match present(params, name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                SimError::invalid(name, format!("expected a non-negative integer, got {v}"))
            }),
    }
}

/// Extracts a `String` from `params[name]`, returning `default` if missing.
pub fn param_string(params: &Value, name: &str, default: &str) -> Result<String, SimError> {
    match present(params, name) {
        None => Ok(default.to_owned()),
        Some(v) => v
            .as_str()
            .map(String::from)
            .ok_or_else(|| SimError::invalid(name, format!("expected a string, got {v}"))),
    }
}

/// Checks that `value` is finite and strictly positive.
pub fn require_positive(name: &str, value: f64) -> Result<f64, SimError> {
    if !value.is_finite() {
        return Err(SimError::invalid(name, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(SimError::invalid(name, format!("must be positive, got {value}")));
    }
    Ok(value)
}

/// Checks that a count is at least 1.
pub fn require_count(name: &str, value: usize) -> Result<usize, SimError> {
    if value == 0 {
        return Err(SimError::invalid(name, "must be at least 1, got 0"));
    }
    Ok(value)
}
