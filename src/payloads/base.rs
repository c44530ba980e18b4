// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::{EventId, LogLevel};
use serde::Serializer;
use std::cell::OnceCell;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// An event message that is rendered on first use and then reused.
///
/// One instance is created per dispatch call and shared by both channels,
/// so the template is rendered at most once no matter how many consumers
/// read the text.
pub struct LazyMessage<'a> {
    render: &'a (dyn Fn() -> String + 'a),
    rendered: OnceCell<String>,
}

impl<'a> LazyMessage<'a> {
    pub fn new(render: &'a (dyn Fn() -> String + 'a)) -> Self {
        Self {
            render,
            rendered: OnceCell::new(),
        }
    }

    pub fn get(&self) -> &str {
        self.rendered.get_or_init(|| (self.render)())
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.get().is_some()
    }
}

impl fmt::Debug for LazyMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rendered.get() {
            Some(message) => f.debug_tuple("LazyMessage").field(message).finish(),
            None => f.write_str("LazyMessage(<unrendered>)"),
        }
    }
}

/// Fields every payload carries: the event identity, the level it was
/// dispatched at and the lazily rendered message.
#[derive(Debug, Clone, Copy)]
pub struct EventBase<'a> {
    pub event_id: EventId,
    pub level: LogLevel,
    message: &'a LazyMessage<'a>,
}

impl<'a> EventBase<'a> {
    pub fn new(event_id: EventId, level: LogLevel, message: &'a LazyMessage<'a>) -> Self {
        Self {
            event_id,
            level,
            message,
        }
    }

    /// The same text the leveled sink receives for this dispatch.
    pub fn message(&self) -> &'a str {
        self.message.get()
    }

    pub fn is_message_rendered(&self) -> bool {
        self.message.is_rendered()
    }
}

pub(crate) fn serialize_error<S: Serializer>(
    error: &&(dyn Error + 'static),
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

pub(crate) fn serialize_duration_ms<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn renders_once_and_caches() {
        let calls = Cell::new(0);
        let render = || {
            calls.set(calls.get() + 1);
            format!("rendered {}", calls.get())
        };
        let message = LazyMessage::new(&render);
        assert!(!message.is_rendered());
        assert_eq!(message.get(), "rendered 1");
        assert_eq!(message.get(), "rendered 1");
        assert_eq!(calls.get(), 1);
        assert!(message.is_rendered());
    }

    #[test]
    fn debug_does_not_render() {
        let render = || -> String { panic!("debug formatting must not render") };
        let message = LazyMessage::new(&render);
        assert_eq!(format!("{:?}", message), "LazyMessage(<unrendered>)");
    }
}
