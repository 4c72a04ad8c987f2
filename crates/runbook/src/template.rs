// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template variable interpolation

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_-]*)\}").expect("constant regex pattern is valid")
});

/// Replace `{name}` placeholders with values from `vars`
///
/// Unknown placeholders are left as-is.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            vars.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Interpolate every string inside a JSON value, keys excluded
pub fn interpolate_value(value: &Value, vars: &HashMap<String, String>) -> Value {
    match value {
        Value::String(s) => Value::String(interpolate(s, vars)),
        Value::Array(items) => items.iter().map(|v| interpolate_value(v, vars)).collect(),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), interpolate_value(v, vars)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
