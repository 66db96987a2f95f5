use super::error::PatternErrorKind;
use crate::token::Token;

use smallvec::SmallVec;

pub(super) fn check_tokens(tokens: &[Token], separator: char) -> Result<(), PatternErrorKind> {
    check_names(tokens)?;
    check_wildcard_at_end(tokens)?;
    check_separated(tokens, separator)
}

fn check_names(tokens: &[Token]) -> Result<(), PatternErrorKind> {
    let mut seen: SmallVec<[&str; 8]> = SmallVec::new();
    for name in tokens.iter().filter_map(Token::name) {
        if name.is_empty() {
            return Err(PatternErrorKind::EmptyName);
        }
        if !name.chars().all(is_name_char) {
            return Err(PatternErrorKind::InvalidName(name.into()));
        }
        if seen.contains(&name) {
            return Err(PatternErrorKind::DuplicateName(name.into()));
        }
        seen.push(name);
    }
    Ok(())
}

fn check_wildcard_at_end(tokens: &[Token]) -> Result<(), PatternErrorKind> {
    match tokens.iter().position(Token::is_wildcard) {
        Some(i) if i + 1 != tokens.len() => Err(PatternErrorKind::WildcardNotLast),
        _ => Ok(()),
    }
}

/// A capture must be followed by the separator, otherwise its end is ambiguous.
fn check_separated(tokens: &[Token], separator: char) -> Result<(), PatternErrorKind> {
    for pair in tokens.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if !prev.is_capture() {
            continue;
        }
        match next.as_literal() {
            None => return Err(PatternErrorKind::AdjacentCaptures),
            Some(text) if !text.starts_with(separator) => {
                return Err(PatternErrorKind::MissingSeparator(separator))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
