// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event definitions: identity, default level and message template.
//!
//! Templates use positional placeholders (`{0}`, `{1}`, ...) with `{{` and
//! `}}` as escapes. The arity `N` is part of the type, so call sites must hand
//! `generate_message` exactly `N` arguments, and [`EventDefinition::new`]
//! rejects a template whose placeholders do not cover `0..N`. Because the
//! definitions are statics, that rejection happens at compile time.

use crate::catalog::category::{Category, LoggerCategory};
use crate::catalog::event_id::{EventId, LogLevel};
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;

/// Returned by [`placeholder_arity`] for templates that cannot be rendered.
pub const MALFORMED_TEMPLATE: usize = usize::MAX;

/// A single, process-wide event definition for category `C` taking `N`
/// message arguments.
pub struct EventDefinition<C, const N: usize> {
    event_id: EventId,
    level: LogLevel,
    template: &'static str,
    _category: PhantomData<fn() -> C>,
}

impl<C, const N: usize> EventDefinition<C, N> {
    pub const fn new(event_id: EventId, level: LogLevel, template: &'static str) -> Self {
        assert!(
            placeholder_arity(template) == N,
            "message template placeholders do not match the definition's argument count"
        );
        Self {
            event_id,
            level,
            template,
            _category: PhantomData,
        }
    }

    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Render the template with `args`. Pure: identical arguments always
    /// produce identical text.
    pub fn generate_message(&self, args: [&dyn Display; N]) -> String {
        RenderedTemplate {
            template: self.template,
            args: &args,
        }
        .to_string()
    }
}

/// Type-erased view of a definition, used by the catalog and the policy.
pub trait EventDescriptor: Sync {
    fn event_id(&self) -> EventId;
    fn level(&self) -> LogLevel;
    fn category(&self) -> Category;
    fn template(&self) -> &'static str;
    fn arity(&self) -> usize;

    /// Only events whose default level is Warning or above may be escalated
    /// to `Throw`. Debug/Information notices always stay loggable.
    fn is_escalatable(&self) -> bool {
        self.level() >= LogLevel::Warning
    }
}

impl<C: LoggerCategory, const N: usize> EventDescriptor for EventDefinition<C, N> {
    fn event_id(&self) -> EventId {
        self.event_id
    }

    fn level(&self) -> LogLevel {
        self.level
    }

    fn category(&self) -> Category {
        C::CATEGORY
    }

    fn template(&self) -> &'static str {
        self.template
    }

    fn arity(&self) -> usize {
        N
    }
}

impl<C: LoggerCategory, const N: usize> fmt::Debug for EventDefinition<C, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDefinition")
            .field("event_id", &self.event_id)
            .field("level", &self.level)
            .field("category", &C::CATEGORY)
            .field("arity", &N)
            .finish()
    }
}

struct RenderedTemplate<'t, 'a> {
    template: &'t str,
    args: &'t [&'a dyn Display],
}

impl Display for RenderedTemplate<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rest = self.template;
        while let Some(position) = rest.find(['{', '}']) {
            f.write_str(&rest[..position])?;
            let tail = &rest[position..];
            if tail.starts_with("{{") || tail.starts_with("}}") {
                f.write_str(&tail[..1])?;
                rest = &tail[2..];
                continue;
            }
            match tail[1..].find('}') {
                Some(close) if tail.starts_with('{') => {
                    let placeholder = &tail[1..=close];
                    match placeholder.parse::<usize>().ok().and_then(|i| self.args.get(i)) {
                        Some(arg) => arg.fmt(f)?,
                        None => f.write_str(&tail[..close + 2])?,
                    }
                    rest = &tail[close + 2..];
                }
                _ => {
                    f.write_str(&tail[..1])?;
                    rest = &tail[1..];
                }
            }
        }
        f.write_str(rest)
    }
}

/// Number of distinct positional arguments a template consumes, or
/// [`MALFORMED_TEMPLATE`] when a placeholder is unterminated, non-numeric,
/// a brace is unbalanced, or the indices leave a gap.
pub const fn placeholder_arity(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut seen: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'{' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                i += 2;
                continue;
            }
            let mut j = i + 1;
            let mut index: usize = 0;
            let mut digits = 0;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                index = index * 10 + (bytes[j] - b'0') as usize;
                digits += 1;
                j += 1;
            }
            if digits == 0 || j >= bytes.len() || bytes[j] != b'}' || index >= 64 {
                return MALFORMED_TEMPLATE;
            }
            seen |= 1u64 << index;
            i = j + 1;
            continue;
        }
        if b == b'}' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                i += 2;
                continue;
            }
            return MALFORMED_TEMPLATE;
        }
        i += 1;
    }
    if seen & seen.wrapping_add(1) != 0 {
        return MALFORMED_TEMPLATE;
    }
    seen.count_ones() as usize
}
