mod builder;
mod captures;
mod config;
mod core;
mod error;
mod imp;
mod observer;

pub use self::builder::RouterBuilder;
pub use self::captures::Captures;
pub use self::config::Config;
pub use self::error::BuildError;
pub use self::observer::{RouteEvent, RouteObserver, TraceEvents};

use crate::query::Query;
use crate::token::Token;

use std::collections::HashMap;

/// A compiled, read-only set of rules.
///
/// Built once by [`RouterBuilder::build`], then shared freely between readers.
#[derive(Debug)]
pub struct Router<T> {
    rules: Box<[Rule<T>]>,
    root: Box<[Node]>,
    quick_match: HashMap<Box<str>, usize>,
}

/// A registered pattern and its handler.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    query: Query,
    handler: T,
}

/// An edge of the prefix tree. `terminal` is an index into `Router::rules`.
#[derive(Debug, Clone)]
struct Node {
    token: Token,
    children: Box<[Node]>,
    terminal: Option<usize>,
}

impl<T> Rule<T> {
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn handler(&self) -> &T {
        &self.handler
    }
}

impl Node {
    fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
