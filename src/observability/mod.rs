// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The crate's own operational logging.
//!
//! This is separate from the events the crate dispatches on behalf of its
//! callers: these messages describe the dispatch layer itself (catalog
//! initialization, policy construction, configuration loading). They follow
//! the same struct-based pattern everywhere: a message struct, a `Display`
//! impl for the human-readable text and a [`messages::StructuredLog`] impl
//! that emits a `tracing` event with structured fields.
//!
//! # Usage
//!
//! ```rust
//! use the_bellwether::observability::messages::catalog::CatalogInitialized;
//! use the_bellwether::observability::messages::StructuredLog;
//!
//! let msg = CatalogInitialized { definition_count: 69 };
//! msg.log();
//! ```

pub mod messages;
