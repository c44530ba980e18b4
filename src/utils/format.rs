// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text helpers shared by the call sites when building message arguments.

use crate::domain::DbParameter;
use std::fmt::Write;
use std::time::Duration;

/// `1234567` becomes `1,234,567`.
pub fn with_thousands_separators(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Whole milliseconds, grouped.
pub fn format_elapsed_ms(elapsed: Duration) -> String {
    with_thousands_separators(elapsed.as_millis())
}

/// Comma-separated list, as used for unmapped column lists.
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(name.as_ref());
    }
    out
}

/// Render command parameters as `@p0='1', @p1='?'`.
///
/// Values are only written when `log_values` is set; otherwise each value
/// is masked with `?`. A parameter without a value renders as `NULL`.
pub fn format_parameters(parameters: &[DbParameter], log_values: bool) -> String {
    let mut out = String::new();
    for (index, parameter) in parameters.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.name);
        out.push('=');
        match (&parameter.value, log_values) {
            (Some(value), true) => {
                let _ = write!(out, "'{}'", value);
            }
            (None, true) => out.push_str("NULL"),
            (_, false) => out.push_str("'?'"),
        }
    }
    out
}

/// Replace every run of whitespace (newlines included) with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// At most `limit` characters, with `...` appended when cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
