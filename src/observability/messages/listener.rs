// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Observer attached to a diagnostic listener.
///
/// # Log Level
/// `debug!`
pub struct ObserverSubscribed<'a> {
    pub listener: &'a str,
    pub subscription_id: u64,
    pub subscriber_count: usize,
}

impl Display for ObserverSubscribed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer #{} subscribed to listener '{}' ({} active)",
            self.subscription_id, self.listener, self.subscriber_count
        )
    }
}

impl StructuredLog for ObserverSubscribed<'_> {
    fn log(&self) {
        tracing::debug!(
            listener = self.listener,
            subscription_id = self.subscription_id,
            subscriber_count = self.subscriber_count,
            "{}", self
        );
    }
}

/// Observer detached from a diagnostic listener.
///
/// # Log Level
/// `debug!`
pub struct ObserverUnsubscribed<'a> {
    pub listener: &'a str,
    pub subscription_id: u64,
}

impl Display for ObserverUnsubscribed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer #{} unsubscribed from listener '{}'",
            self.subscription_id, self.listener
        )
    }
}

impl StructuredLog for ObserverUnsubscribed<'_> {
    fn log(&self) {
        tracing::debug!(
            listener = self.listener,
            subscription_id = self.subscription_id,
            "{}", self
        );
    }
}
