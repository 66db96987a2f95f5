use super::config::Config;
use super::error::BuildError;
use super::observer::RouteEvent;
use super::{Node, Router, Rule};

use crate::slice::Slice;
use crate::token::Token;

use std::collections::{HashMap, VecDeque};

/// The unconsumed tokens of one rule at some depth of the tree.
struct Sequence {
    tokens: VecDeque<Token>,
    rule: usize,
}

struct Compiler<'a, T> {
    rules: &'a [Rule<T>],
    config: &'a Config,
}

impl<T> Router<T> {
    pub(super) fn compile(rules: Vec<Rule<T>>, config: &Config) -> Result<Self, BuildError> {
        let compiler = Compiler {
            rules: &rules,
            config,
        };

        let quick_match = if config.quick_match {
            compiler.quick_match_index()?
        } else {
            HashMap::new()
        };

        let sequences: Vec<Sequence> = rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| !(config.excludes_constants() && rule.query.is_constant()))
            .map(|(id, rule)| Sequence {
                tokens: rule.query.tokens().iter().cloned().collect(),
                rule: id,
            })
            .collect();

        let (root, _) = compiler.build_level(sequences)?;

        tracing::debug!(
            rules = rules.len(),
            quick_match = quick_match.len(),
            nodes = root.iter().map(Node::count).sum::<usize>(),
            "router compiled"
        );

        let router = Self {
            rules: rules.into(),
            root,
            quick_match,
        };
        if !config.quick_match {
            router.log_shadowed_constants();
        }
        Ok(router)
    }

    /// Without the index a constant competes in the greedy walk and may land on another rule.
    fn log_shadowed_constants(&self) {
        for (id, rule) in self.rules.iter().enumerate() {
            if !rule.query.is_constant() {
                continue;
            }
            let input = Slice::new(rule.query.as_str());
            let reached = self.navigate(input, &mut |_: &RouteEvent<'_, '_>| {});
            match reached {
                Some((other, _)) if other == id => {}
                Some((other, _)) => tracing::debug!(
                    pattern = rule.query.as_str(),
                    reached = self.rules[other].query.as_str(),
                    "constant rule is shadowed in the tree"
                ),
                None => tracing::debug!(
                    pattern = rule.query.as_str(),
                    "constant rule is unreachable through the tree"
                ),
            }
        }
    }
}

impl<T> Compiler<'_, T> {
    fn pattern(&self, id: usize) -> Box<str> {
        self.rules[id].query.as_str().into()
    }

    fn quick_match_index(&self) -> Result<HashMap<Box<str>, usize>, BuildError> {
        let mut index: HashMap<Box<str>, usize> = HashMap::new();
        for (id, rule) in self.rules.iter().enumerate() {
            if !rule.query.is_constant() {
                continue;
            }
            if let Some(&prev) = index.get(rule.query.as_str()) {
                let err = BuildError::DuplicateRule {
                    patterns: vec![self.pattern(prev), self.pattern(id)],
                };
                tracing::debug!(error = %err, "router build failed");
                return Err(err);
            }
            index.insert(rule.query.as_str().into(), id);
        }
        Ok(index)
    }

    fn build_node(&self, token: Token, sequences: Vec<Sequence>) -> Result<Node, BuildError> {
        let (children, terminal) = self.build_level(sequences)?;
        Ok(Node {
            token,
            children,
            terminal,
        })
    }

    fn build_level(
        &self,
        mut sequences: Vec<Sequence>,
    ) -> Result<(Box<[Node]>, Option<usize>), BuildError> {
        let terminal = self.take_terminal(&mut sequences)?;

        if !self.factor_common_prefix(&mut sequences) && self.config.split_at_separator {
            split_at_separator(&mut sequences, self.config.separator);
        }

        let groups = group_by_head(sequences);
        self.check_siblings(&groups)?;

        let mut children: Vec<Node> = Vec::with_capacity(groups.len());
        for (token, members) in groups {
            let node = self.build_node(token, members)?;
            children.push(compact(node));
        }

        Ok((children.into(), terminal))
    }

    /// Removes the exhausted sequences. At most one rule may end at a node.
    fn take_terminal(&self, sequences: &mut Vec<Sequence>) -> Result<Option<usize>, BuildError> {
        let ended: Vec<usize> = sequences
            .iter()
            .filter(|seq| seq.tokens.is_empty())
            .map(|seq| seq.rule)
            .collect();

        if ended.len() > 1 {
            let err = BuildError::DuplicateRule {
                patterns: ended.iter().map(|&id| self.pattern(id)).collect(),
            };
            tracing::debug!(error = %err, "router build failed");
            return Err(err);
        }

        sequences.retain(|seq| !seq.tokens.is_empty());
        Ok(ended.first().copied())
    }

    /// Rewrites every pending literal as `common prefix` + `remainder`.
    ///
    /// Returns `false` if no prefix long enough is shared by all pending literals.
    fn factor_common_prefix(&self, sequences: &mut [Sequence]) -> bool {
        let prefix: Box<str> = {
            let mut literals = sequences
                .iter()
                .filter_map(|seq| seq.tokens.front().and_then(Token::as_literal));
            let first = match literals.next() {
                Some(text) => text,
                None => return false,
            };
            literals.fold(first, common_prefix).into()
        };

        if prefix.is_empty() || prefix.chars().count() < self.config.min_common_prefix {
            return false;
        }

        for seq in sequences.iter_mut() {
            let remainder: Box<str> = match seq.tokens.front().and_then(Token::as_literal) {
                Some(text) if text.len() > prefix.len() => text[prefix.len()..].into(),
                _ => continue,
            };
            seq.tokens.pop_front();
            seq.tokens.push_front(Token::Literal(remainder));
            seq.tokens.push_front(Token::Literal(prefix.clone()));
        }
        true
    }

    fn check_siblings(&self, groups: &[(Token, Vec<Sequence>)]) -> Result<(), BuildError> {
        let conflict = |pred: fn(&Token) -> bool| -> Option<(Vec<Box<str>>, Vec<Box<str>>)> {
            let siblings: Vec<&(Token, Vec<Sequence>)> =
                groups.iter().filter(|(token, _)| pred(token)).collect();
            if siblings.len() < 2 {
                return None;
            }
            let names = siblings
                .iter()
                .filter_map(|(token, _)| token.name())
                .map(Into::into)
                .collect();
            let patterns = siblings
                .iter()
                .flat_map(|(_, members)| members.iter())
                .map(|seq| self.pattern(seq.rule))
                .collect();
            Some((names, patterns))
        };

        let err = if let Some((names, patterns)) = conflict(Token::is_variable) {
            BuildError::AmbiguousVariables { names, patterns }
        } else if let Some((names, patterns)) = conflict(Token::is_wildcard) {
            BuildError::AmbiguousWildcards { names, patterns }
        } else {
            return Ok(());
        };

        tracing::debug!(error = %err, "router build failed");
        Err(err)
    }
}

/// Splits each pending literal at the first separator past its first char.
fn split_at_separator(sequences: &mut [Sequence], separator: char) {
    for seq in sequences.iter_mut() {
        let split = seq
            .tokens
            .front()
            .and_then(Token::as_literal)
            .and_then(|text| {
                let (i, _) = text.char_indices().skip(1).find(|&(_, c)| c == separator)?;
                Some((Box::<str>::from(&text[..i]), Box::<str>::from(&text[i..])))
            });
        if let Some((head, tail)) = split {
            seq.tokens.pop_front();
            seq.tokens.push_front(Token::Literal(tail));
            seq.tokens.push_front(Token::Literal(head));
        }
    }
}

/// Groups sequences by their (consumed) first token. Captures are grouped by
/// name whatever their kind; the first occurrence decides the edge.
///
/// Literal groups come first, then variables, then wildcards, so that on a tie
/// the most specific edge is evaluated first. Within a class the order of first
/// occurrence is kept.
fn group_by_head(sequences: Vec<Sequence>) -> Vec<(Token, Vec<Sequence>)> {
    let mut groups: Vec<(Token, Vec<Sequence>)> = Vec::new();
    for mut seq in sequences {
        let head = match seq.tokens.pop_front() {
            Some(t) => t,
            None => continue,
        };
        match groups.iter_mut().find(|(token, _)| same_edge(token, &head)) {
            Some((_, members)) => members.push(seq),
            None => groups.push((head, vec![seq])),
        }
    }
    groups.sort_by_key(|(token, _)| token.rank());
    groups
}

fn same_edge(lhs: &Token, rhs: &Token) -> bool {
    match (lhs.name(), rhs.name()) {
        (Some(l), Some(r)) => l == r,
        _ => lhs == rhs,
    }
}

/// Joins a non-terminal literal edge with its only literal child.
fn compact(node: Node) -> Node {
    let joinable = node.terminal.is_none()
        && node.token.is_literal()
        && matches!(&*node.children, [child] if child.token.is_literal());
    if !joinable {
        return node;
    }

    let Node {
        token, children, ..
    } = node;
    match (token, children.into_vec().pop()) {
        (
            Token::Literal(head),
            Some(Node {
                token: Token::Literal(tail),
                children,
                terminal,
            }),
        ) => Node {
            token: Token::Literal([&*head, &*tail].concat().into()),
            children,
            terminal,
        },
        (token, child) => Node {
            token,
            children: child.into_iter().collect(),
            terminal: None,
        },
    }
}

/// The longest common prefix of `lhs` and `rhs`, cut on a char boundary.
fn common_prefix<'a>(lhs: &'a str, rhs: &str) -> &'a str {
    let len = lhs
        .char_indices()
        .zip(rhs.chars())
        .find(|&((_, l), r)| l != r)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| lhs.len().min(rhs.len()));
    &lhs[..len]
}
