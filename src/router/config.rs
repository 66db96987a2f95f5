use crate::query::DEFAULT_SEPARATOR;

/// Build-time options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The character that ends a `{variable}` capture.
    pub separator: char,
    /// Route constant patterns through an exact-string index before the tree.
    pub quick_match: bool,
    /// Leave constant patterns out of the tree. Only honored with `quick_match`.
    pub exclude_constants: bool,
    /// Shortest shared literal prefix (in chars) that is factored into its own edge.
    pub min_common_prefix: usize,
    /// Split literals at the first separator when no common prefix was factored.
    pub split_at_separator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quick_match: true,
            exclude_constants: true,
            min_common_prefix: 1,
            split_at_separator: false,
        }
    }
}

impl Config {
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn quick_match(mut self, enabled: bool) -> Self {
        self.quick_match = enabled;
        self
    }

    pub fn exclude_constants(mut self, enabled: bool) -> Self {
        self.exclude_constants = enabled;
        self
    }

    pub fn min_common_prefix(mut self, chars: usize) -> Self {
        self.min_common_prefix = chars;
        self
    }

    pub fn split_at_separator(mut self, enabled: bool) -> Self {
        self.split_at_separator = enabled;
        self
    }

    #[inline]
    pub(super) fn excludes_constants(&self) -> bool {
        self.quick_match && self.exclude_constants
    }
}
