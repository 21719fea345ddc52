//! Shared utilities for operations across cardgraph crates.

use crate::{Error, Result};

/// Generic JSON serialization with consistent error handling
/// Works with any type that implements Serialize (including slices)
pub fn to_json_string<T: serde::Serialize + ?Sized>(data: &T, context: &str) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| {
        Error::serialization_error(format!("Failed to serialize {} as JSON: {}", context, e))
    })
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
