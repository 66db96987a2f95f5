//! A compile-once, match-many path router.
//!
//! Patterns mix literal text, `{name}` variables bounded by a separator and a
//! trailing `{*name}` wildcard. They are compiled into a prefix tree that is
//! walked greedily: at every step the edge with the longest match wins, and on
//! a tie a literal beats a variable, which beats a wildcard.
//!
//! ```
//! use prefix_router::RouterBuilder;
//!
//! let mut builder = RouterBuilder::new();
//! builder
//!     .add("/user/{name}", 1)
//!     .add("/user/{name}/files/{*path}", 2)
//!     .add("/about", 3);
//! let router = builder.build().unwrap();
//!
//! let (handler, captures) = router.route("/user/alice/files/a/b.txt").unwrap();
//! assert_eq!(*handler, 2);
//! assert_eq!(captures.get("name"), Some("alice"));
//! assert_eq!(captures.get("path"), Some("a/b.txt"));
//!
//! assert!(router.route("/user/").is_none());
//! ```

#![forbid(unsafe_code)]

mod query;
mod router;
mod slice;
mod token;

pub use crate::query::{PatternError, PatternErrorKind, Query, DEFAULT_SEPARATOR};
pub use crate::router::{
    BuildError, Captures, Config, RouteEvent, RouteObserver, Router, RouterBuilder, Rule,
    TraceEvents,
};
pub use crate::slice::Slice;
pub use crate::token::Token;
