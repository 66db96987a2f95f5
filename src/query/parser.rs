use super::error::PatternErrorKind;
use super::validate;
use crate::token::Token;

const VAR_OPEN: char = '{';
const VAR_CLOSE: char = '}';
const STAR: char = '*';

/// Splits a pattern into literal runs, `{name}` variables and `{*name}` wildcards.
///
/// ```text
/// /foo/bar          -> a single literal
/// /{foo}            -> a literal and the variable `foo`
/// /foo/{foo}/{*bar} -> literals, the variable `foo` and the wildcard `bar`
/// ```
pub(super) fn parse(pattern: &str, separator: char) -> Result<Vec<Token>, PatternErrorKind> {
    if pattern.is_empty() {
        return Err(PatternErrorKind::Empty);
    }
    check_brackets(pattern)?;

    let mut tokens: Vec<Token> = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find(VAR_OPEN) {
        if open > 0 {
            tokens.push(Token::literal(&rest[..open]));
        }
        let close = match rest[open..].find(VAR_CLOSE) {
            Some(i) => open + i,
            None => return Err(PatternErrorKind::UnclosedBracket),
        };

        let marker = &rest[open + VAR_OPEN.len_utf8()..close];
        let token = match marker.strip_prefix(STAR) {
            Some(name) => Token::wildcard(name),
            None => Token::variable(marker, separator),
        };
        tokens.push(token);

        rest = &rest[close + VAR_CLOSE.len_utf8()..];
    }
    if !rest.is_empty() {
        tokens.push(Token::literal(rest));
    }

    validate::check_tokens(&tokens, separator)?;
    Ok(tokens)
}

fn check_brackets(pattern: &str) -> Result<(), PatternErrorKind> {
    let mut open = false;
    for c in pattern.chars() {
        match c {
            VAR_OPEN if open => return Err(PatternErrorKind::NestedVariables),
            VAR_OPEN => open = true,
            VAR_CLOSE if !open => return Err(PatternErrorKind::UnmatchedBracket),
            VAR_CLOSE => open = false,
            _ => {}
        }
    }
    if open {
        return Err(PatternErrorKind::UnclosedBracket);
    }
    Ok(())
}
