use super::config::Config;
use super::error::BuildError;
use super::{Router, Rule};

use crate::query::{PatternError, Query};

/// Collects rules, then compiles them into a [`Router`].
#[derive(Debug, Clone)]
pub struct RouterBuilder<T> {
    config: Config,
    rules: Vec<Rule<T>>,
}

impl<T> Default for RouterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouterBuilder<T> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            rules: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Registers `pattern`.
    ///
    /// # Panics
    /// Panics if `pattern` is malformed. See [`try_add`](Self::try_add).
    pub fn add(&mut self, pattern: &str, handler: T) -> &mut Self {
        if let Err(e) = self.try_add(pattern, handler) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add(&mut self, pattern: &str, handler: T) -> Result<&mut Self, PatternError> {
        let query = Query::parse(pattern, self.config.separator)?;
        Ok(self.add_query(query, handler))
    }

    /// Registers an already parsed query. Its separator may differ from the configured one.
    pub fn add_query(&mut self, query: Query, handler: T) -> &mut Self {
        self.rules.push(Rule { query, handler });
        self
    }

    /// # Panics
    /// Panics on the first malformed pattern.
    pub fn add_many<I, S>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        for (pattern, handler) in rules {
            self.add(pattern.as_ref(), handler);
        }
        self
    }

    /// Stops at the first malformed pattern, keeping the rules added before it.
    pub fn try_add_many<I, S>(&mut self, rules: I) -> Result<&mut Self, PatternError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        for (pattern, handler) in rules {
            self.try_add(pattern.as_ref(), handler)?;
        }
        Ok(self)
    }

    /// Compiles the rule set. Either every rule is routable or nothing is built.
    pub fn build(self) -> Result<Router<T>, BuildError> {
        Router::compile(self.rules, &self.config)
    }
}

impl<T, S: AsRef<str>> Extend<(S, T)> for RouterBuilder<T> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}
