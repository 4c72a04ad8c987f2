// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    simple = { "who=ada", "who", "ada" },
    empty_value = { "who=", "who", "" },
    value_with_equals = { "expr=a=b", "expr", "a=b" },
)]
fn parse_key_val_accepts(input: &str, key: &str, value: &str) {
    assert_eq!(
        parse_key_val(input).unwrap(),
        (key.to_string(), value.to_string())
    );
}

#[parameterized(
    no_equals = { "who" },
    empty_key = { "=ada" },
)]
fn parse_key_val_rejects(input: &str) {
    assert!(parse_key_val(input).is_err());
}

#[test]
fn input_args_become_string_object() {
    let named: HashMap<String, String> = [("n".to_string(), "3".to_string())]
        .into_iter()
        .collect();
    assert_eq!(input_args(named), json!({"n": "3"}));
}
