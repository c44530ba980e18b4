// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Payloads for query compilation and execution.

use crate::domain::{Expression, QueryModel};
use crate::payloads::base::{serialize_error, EventBase};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
pub struct QueryModelPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub query_model: &'a QueryModel,
}

#[derive(Debug, Serialize)]
pub struct ExpressionPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub expression: &'a Expression,
}

#[derive(Debug, Serialize)]
pub struct BinaryExpressionPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub left: &'a Expression,
    pub right: &'a Expression,
}

#[derive(Debug, Serialize)]
pub struct NavigationPathPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub navigation_path: &'a str,
}

/// A failure attributed to a context type, raised while iterating query
/// results or saving changes.
#[derive(Debug, Serialize)]
pub struct ContextErrorPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub context_type: &'a str,
    #[serde(serialize_with = "serialize_error")]
    pub error: &'a (dyn Error + 'static),
}
