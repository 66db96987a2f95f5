/// A structural conflict in the rule set, found while compiling it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("duplicate rules found: {patterns:?}")]
    DuplicateRule { patterns: Vec<Box<str>> },

    #[error("sibling variables {names:?} can not be told apart, one of them would never match: {patterns:?}")]
    AmbiguousVariables {
        names: Vec<Box<str>>,
        patterns: Vec<Box<str>>,
    },

    #[error("sibling wildcards {names:?} can not be told apart, one of them would never match: {patterns:?}")]
    AmbiguousWildcards {
        names: Vec<Box<str>>,
        patterns: Vec<Box<str>>,
    },
}

impl BuildError {
    /// Every pattern involved in the conflict.
    pub fn patterns(&self) -> &[Box<str>] {
        match self {
            Self::DuplicateRule { patterns }
            | Self::AmbiguousVariables { patterns, .. }
            | Self::AmbiguousWildcards { patterns, .. } => patterns,
        }
    }
}
