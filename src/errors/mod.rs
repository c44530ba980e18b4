// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod catalog;
mod config;
mod diagnostics;
mod sink;

pub use catalog::CatalogError;
pub use config::ConfigError;
pub use diagnostics::DiagnosticsError;
pub use sink::SinkError;
