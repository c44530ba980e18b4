// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod sink;

pub use sink::{name_matches, EventObserver, LeveledSink, LogRecord, StructuredSink};
