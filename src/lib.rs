// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // leveled and structured sinks
pub mod catalog;       // event ids, categories, definitions
pub mod config;        // YAML/TOML diagnostics configuration
pub mod diagnostics;   // typed call sites and dispatch
pub mod domain;        // runtime objects events describe
pub mod errors;        // error handling
pub mod observability; // the crate's own tracing
pub mod payloads;      // structured-channel records
pub mod policy;        // warnings-as-errors and re-leveling
pub mod traits;        // sink abstractions
pub mod utils;

pub use diagnostics::{Diagnostics, DiagnosticsBuilder, DiagnosticsLogger};
pub use errors::DiagnosticsError;
