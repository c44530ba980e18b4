// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// `EnvFilter` directive used when neither `RUST_LOG` nor the configuration
/// sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";
