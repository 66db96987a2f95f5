mod error;
mod parser;
mod validate;

pub use self::error::{PatternError, PatternErrorKind};

use crate::token::Token;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '/';

/// A parsed pattern: the source text and its token sequence.
///
/// Two queries are equal iff their source patterns are equal.
#[derive(Debug, Clone)]
pub struct Query {
    pattern: Box<str>,
    tokens: Box<[Token]>,
}

impl Query {
    pub fn parse(pattern: &str, separator: char) -> Result<Self, PatternError> {
        match parser::parse(pattern, separator) {
            Ok(tokens) => Ok(Self {
                pattern: pattern.into(),
                tokens: tokens.into(),
            }),
            Err(kind) => Err(PatternError::new(pattern, kind)),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// A constant query is a single literal and can be matched by string equality.
    pub fn is_constant(&self) -> bool {
        match &*self.tokens {
            [t] => t.is_literal(),
            _ => false,
        }
    }

    pub fn captures(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().filter_map(Token::name)
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Query {}

impl Hash for Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state)
    }
}

impl FromStr for Query {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_SEPARATOR)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
