// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SinkError;
use crate::observability::messages::listener::{ObserverSubscribed, ObserverUnsubscribed};
use crate::observability::messages::StructuredLog;
use crate::payloads::EventPayload;
use crate::traits::{name_matches, EventObserver, StructuredSink};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Handle returned by [`DiagnosticListener::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    prefix: Option<String>,
    observer: Arc<dyn EventObserver>,
}

/// Fan-out structured sink. Observers subscribe with an optional event-name
/// prefix and receive every matching payload synchronously.
///
/// The listener is enabled for an event only while at least one observer
/// matches it, so unobserved events never build payloads.
pub struct DiagnosticListener {
    name: String,
    subscriptions: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl DiagnosticListener {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach `observer`. With `prefix = None` it sees every event.
    pub fn subscribe(
        &self,
        prefix: Option<&str>,
        observer: impl EventObserver + 'static,
    ) -> Result<SubscriptionId, SinkError> {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?;
        subscriptions.push(Subscription {
            id,
            prefix: prefix.map(str::to_string),
            observer: Arc::new(observer),
        });

        ObserverSubscribed {
            listener: &self.name,
            subscription_id: id.0,
            subscriber_count: subscriptions.len(),
        }
        .log();
        Ok(id)
    }

    /// Detach a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, SinkError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?;
        let before = subscriptions.len();
        subscriptions.retain(|subscription| subscription.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            ObserverUnsubscribed {
                listener: &self.name,
                subscription_id: id.0,
            }
            .log();
        }
        Ok(removed)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions
            .read()
            .map(|subscriptions| subscriptions.len())
            .unwrap_or(0)
    }

    fn matching(&self, event_name: &str) -> Result<Vec<Arc<dyn EventObserver>>, SinkError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?;
        Ok(subscriptions
            .iter()
            .filter(|subscription| Self::accepts(subscription, event_name))
            .map(|subscription| Arc::clone(&subscription.observer))
            .collect())
    }

    fn accepts(subscription: &Subscription, event_name: &str) -> bool {
        subscription
            .prefix
            .as_deref()
            .map_or(true, |prefix| name_matches(event_name, prefix))
    }
}

impl StructuredSink for DiagnosticListener {
    fn is_enabled(&self, event_name: &str) -> bool {
        self.subscriptions
            .read()
            .map(|subscriptions| {
                subscriptions
                    .iter()
                    .any(|subscription| Self::accepts(subscription, event_name))
            })
            .unwrap_or(false)
    }

    fn write(&self, event_name: &str, payload: &EventPayload<'_>) -> Result<(), SinkError> {
        // observers run outside the lock so they may subscribe or unsubscribe
        for observer in self.matching(event_name)? {
            observer.on_event(event_name, payload);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::scaffolding::FOUND_TABLE;
    use crate::payloads::scaffolding::TablePayload;
    use crate::payloads::{EventBase, LazyMessage};
    use std::sync::Mutex;

    fn publish(listener: &DiagnosticListener, table: &str) {
        let render = || FOUND_TABLE.generate_message([&table]);
        let message = LazyMessage::new(&render);
        let payload: EventPayload = TablePayload {
            base: EventBase::new(FOUND_TABLE.event_id(), FOUND_TABLE.level(), &message),
            table,
        }
        .into();
        listener.write(FOUND_TABLE.event_id().name(), &payload).unwrap();
    }

    #[test]
    fn observers_receive_matching_events() {
        let listener = DiagnosticListener::new("bellwether");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        listener
            .subscribe(Some("Scaffolding"), move |name: &str, payload: &EventPayload<'_>| {
                if let EventPayload::Table(table) = payload {
                    sink.lock().unwrap().push(format!("{name}:{}", table.table));
                }
            })
            .unwrap();

        assert!(listener.is_enabled("Scaffolding.TableFound"));
        assert!(!listener.is_enabled("Database.Sql.CommandExecuting"));

        publish(&listener, "Orders");
        assert_eq!(*seen.lock().unwrap(), vec!["Scaffolding.TableFound:Orders"]);
    }

    #[test]
    fn unsubscribe_disables_listener() {
        let listener = DiagnosticListener::new("bellwether");
        assert!(!listener.is_enabled("Scaffolding.TableFound"));

        let id = listener.subscribe(None, |_: &str, _: &EventPayload<'_>| {}).unwrap();
        assert!(listener.is_enabled("Scaffolding.TableFound"));
        assert_eq!(listener.subscriber_count(), 1);

        assert!(listener.unsubscribe(id).unwrap());
        assert!(!listener.unsubscribe(id).unwrap());
        assert!(!listener.is_enabled("Scaffolding.TableFound"));
    }
}
