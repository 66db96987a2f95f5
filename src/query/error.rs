#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: pattern = {pattern:?}")]
pub struct PatternError {
    pattern: Box<str>,
    kind: PatternErrorKind,
}

/// The reason a pattern was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternErrorKind {
    #[error("pattern can not be empty")]
    Empty,
    #[error("malformed pattern (nested variables)")]
    NestedVariables,
    #[error("malformed pattern (brackets don't match)")]
    UnmatchedBracket,
    #[error("malformed pattern (brackets aren't closed)")]
    UnclosedBracket,
    #[error("capture name can not be empty")]
    EmptyName,
    #[error("invalid capture name {0:?}")]
    InvalidName(Box<str>),
    #[error("duplicate capture name {0:?}")]
    DuplicateName(Box<str>),
    #[error("wildcard pattern can only appear at end")]
    WildcardNotLast,
    #[error("two captures without a separator, the second one is unreachable")]
    AdjacentCaptures,
    #[error("capture is not followed by the {0:?} separator")]
    MissingSeparator(char),
}

impl PatternError {
    pub(crate) fn new(pattern: &str, kind: PatternErrorKind) -> Self {
        Self {
            pattern: pattern.into(),
            kind,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> &PatternErrorKind {
        &self.kind
    }
}
