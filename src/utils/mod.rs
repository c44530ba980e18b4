// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod format;

pub use format::{
    collapse_whitespace, format_elapsed_ms, format_parameters, join_names, truncate_chars,
    with_thousands_separators,
};
