use std::fmt;

/// A unit of a pattern that can be matched against the head of an input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matches the exact text, all or nothing.
    Literal(Box<str>),
    /// Matches everything up to the first `separator`.
    Variable { name: Box<str>, separator: char },
    /// Matches everything up to the end of the input.
    Wildcard { name: Box<str> },
}

impl Token {
    pub fn literal(text: impl Into<Box<str>>) -> Self {
        Self::Literal(text.into())
    }

    pub fn variable(name: impl Into<Box<str>>, separator: char) -> Self {
        Self::Variable {
            name: name.into(),
            separator,
        }
    }

    pub fn wildcard(name: impl Into<Box<str>>) -> Self {
        Self::Wildcard { name: name.into() }
    }

    /// Returns the length in bytes of the match at the start of `input`.
    ///
    /// ```
    /// use prefix_router::Token;
    ///
    /// assert_eq!(Token::literal("/foo").matches("/foo/bar"), Some(4));
    /// assert_eq!(Token::literal("/foo").matches("/"), None);
    /// assert_eq!(Token::variable("var", '/').matches("foo/bar"), Some(3));
    /// assert_eq!(Token::variable("var", '/').matches("/bar"), None);
    /// assert_eq!(Token::wildcard("rest").matches("foo/bar"), Some(7));
    /// assert_eq!(Token::wildcard("rest").matches(""), None);
    /// ```
    #[inline]
    pub fn matches(&self, input: &str) -> Option<usize> {
        match self {
            Self::Literal(text) => some_if(input.starts_with(&**text), text.len()),
            Self::Variable { separator, .. } => {
                non_empty(input.find(*separator).unwrap_or_else(|| input.len()))
            }
            Self::Wildcard { .. } => non_empty(input.len()),
        }
    }

    /// The capture name of a variable or a wildcard.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Variable { name, .. } | Self::Wildcard { name } => Some(&**name),
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(&**text),
            _ => None,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable { .. })
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.is_literal()
    }

    /// Evaluation order among siblings: literals first, wildcards last.
    #[inline]
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Literal(_) => 0,
            Self::Variable { .. } => 1,
            Self::Wildcard { .. } => 2,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Variable { name, .. } => write!(f, "{{{}}}", name),
            Self::Wildcard { name } => write!(f, "{{*{}}}", name),
        }
    }
}

#[inline(always)]
fn some_if<T>(cond: bool, value: T) -> Option<T> {
    if cond {
        Some(value)
    } else {
        None
    }
}

#[inline(always)]
fn non_empty(len: usize) -> Option<usize> {
    some_if(len > 0, len)
}
