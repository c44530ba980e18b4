// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::domain::{PropertyInfo, ServiceProviderInfo};
use crate::payloads::base::EventBase;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PropertyPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub property: &'a PropertyInfo,
}

#[derive(Debug, Serialize)]
pub struct ServiceProviderPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub service_provider: &'a ServiceProviderInfo,
}

#[derive(Debug, Serialize)]
pub struct ServiceProvidersPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub service_providers: &'a [ServiceProviderInfo],
}

/// An event with nothing to report beyond its identity and message.
#[derive(Debug, Serialize)]
pub struct NoticePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
}
