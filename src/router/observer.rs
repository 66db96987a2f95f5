use crate::slice::Slice;
use crate::token::Token;

/// A routing decision, reported to a [`RouteObserver`].
#[derive(Debug, Clone, Copy)]
pub enum RouteEvent<'r, 'p> {
    /// The whole input was found in the quick-match index.
    QuickMatch { input: Slice<'p>, pattern: &'r str },
    /// The longest matching edge was taken.
    Step { token: &'r Token, matched: Slice<'p> },
    /// No edge matches the rest of the input.
    NoContinuation {
        input: Slice<'p>,
        remaining: Slice<'p>,
    },
    /// The input ended in the middle of a rule.
    Incomplete { input: Slice<'p> },
    /// The input ended on a terminal node.
    Matched { input: Slice<'p>, pattern: &'r str },
}

pub trait RouteObserver {
    fn on_event(&mut self, event: &RouteEvent<'_, '_>);
}

impl<F> RouteObserver for F
where
    F: FnMut(&RouteEvent<'_, '_>),
{
    #[inline]
    fn on_event(&mut self, event: &RouteEvent<'_, '_>) {
        (self)(event)
    }
}

/// Logs every event at `TRACE` level. Used by [`Router::route`](super::Router::route).
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceEvents;

impl RouteObserver for TraceEvents {
    fn on_event(&mut self, event: &RouteEvent<'_, '_>) {
        match *event {
            RouteEvent::QuickMatch { input, pattern } => {
                tracing::trace!(input = %input, pattern, "routing: quick-match index hit")
            }
            RouteEvent::Step { token, matched } => {
                tracing::trace!(token = %token, matched = ?matched, "routing: step")
            }
            RouteEvent::NoContinuation { input, remaining } => {
                tracing::trace!(input = %input, remaining = %remaining, "routing: no continuation found")
            }
            RouteEvent::Incomplete { input } => {
                tracing::trace!(input = %input, "routing: stopped on a non-terminal node")
            }
            RouteEvent::Matched { input, pattern } => {
                tracing::trace!(input = %input, pattern, "routing: matched")
            }
        }
    }
}
