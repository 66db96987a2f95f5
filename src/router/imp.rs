use super::captures::Captures;
use super::observer::{RouteEvent, RouteObserver, TraceEvents};
use super::{Node, Router};

use crate::slice::Slice;

use std::fmt;

impl<T> Router<T> {
    /// Finds the rule matching the whole `input`.
    ///
    /// Captured values borrow `input`, capture names and the handler borrow the router.
    pub fn route<'r, 'p>(&'r self, input: &'p str) -> Option<(&'r T, Captures<'r, 'p>)> {
        self.route_slice(Slice::new(input))
    }

    /// Like [`route`](Self::route), for a window of a larger buffer.
    ///
    /// Captured ranges refer to the backing buffer of `input`.
    pub fn route_slice<'r, 'p>(&'r self, input: Slice<'p>) -> Option<(&'r T, Captures<'r, 'p>)> {
        self.navigate(input, &mut TraceEvents)
            .map(|(id, captures)| (&self.rules[id].handler, captures))
    }

    /// Like [`route`](Self::route), reporting every decision to `observer`.
    pub fn route_observed<'r, 'p, O>(
        &'r self,
        input: &'p str,
        observer: &mut O,
    ) -> Option<(&'r T, Captures<'r, 'p>)>
    where
        O: RouteObserver + ?Sized,
    {
        self.navigate(Slice::new(input), observer)
            .map(|(id, captures)| (&self.rules[id].handler, captures))
    }

    /// The number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the index of the matched rule.
    pub(super) fn navigate<'r, 'p, O>(
        &'r self,
        input: Slice<'p>,
        observer: &mut O,
    ) -> Option<(usize, Captures<'r, 'p>)>
    where
        O: RouteObserver + ?Sized,
    {
        if let Some(&id) = self.quick_match.get(input.as_str()) {
            let rule = &self.rules[id];
            observer.on_event(&RouteEvent::QuickMatch {
                input,
                pattern: rule.query.as_str(),
            });
            return Some((id, Captures::new()));
        }

        let mut captures = Captures::new();
        let mut cursor = input;
        let mut current: Option<&'r Node> = None;
        let mut next: &'r [Node] = &self.root;

        while !cursor.is_empty() && !next.is_empty() {
            let mut best: Option<(usize, &'r Node)> = None;
            for node in next {
                match node.token.matches(cursor.as_str()) {
                    Some(len) if len > best.map_or(0, |(max, _)| max) => best = Some((len, node)),
                    _ => {}
                }
            }

            let (len, node) = match best {
                Some(b) => b,
                None => break,
            };

            let matched = cursor.head(len);
            if let Some(name) = node.token.name() {
                captures.push(name, matched);
            }
            observer.on_event(&RouteEvent::Step {
                token: &node.token,
                matched,
            });

            cursor = cursor.skip(len);
            current = Some(node);
            next = &node.children;
        }

        if !cursor.is_empty() {
            observer.on_event(&RouteEvent::NoContinuation {
                input,
                remaining: cursor,
            });
            return None;
        }

        match current.and_then(|node| node.terminal) {
            Some(id) => {
                let rule = &self.rules[id];
                observer.on_event(&RouteEvent::Matched {
                    input,
                    pattern: rule.query.as_str(),
                });
                Some((id, captures))
            }
            None => {
                observer.on_event(&RouteEvent::Incomplete { input });
                None
            }
        }
    }
}

/// Prints the compiled tree, one edge per line.
impl<T: fmt::Debug> fmt::Display for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<root>")?;
        for node in self.root.iter() {
            self.fmt_node(f, node, 1)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> Router<T> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", node.token, indent = depth * 4)?;
        if let Some(id) = node.terminal {
            write!(f, " -> {:?}", self.rules[id].handler)?;
        }
        writeln!(f)?;
        for child in node.children.iter() {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}
