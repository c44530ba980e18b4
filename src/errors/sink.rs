// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure reported by a leveled or structured sink.
///
/// Dispatch never retries or swallows these; they surface to the call site.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("sink state poisoned: {0}")]
    Poisoned(String),

    #[error("sink rejected event '{event_name}': {reason}")]
    Rejected { event_name: String, reason: String },
}
