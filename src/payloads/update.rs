// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::payloads::base::EventBase;
use serde::Serialize;

/// Two dependent entity type instances mapped to the same row.
#[derive(Debug, Serialize)]
pub struct DuplicateDietInstancePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub diet1: &'a str,
    pub diet2: &'a str,
}
