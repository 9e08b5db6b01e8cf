//! Decoding of quoted literals and the logos callbacks that use it.
use logos::Lexer;

use super::common::LexErrorKind;
use super::tokens::Token;

/// Decode a single-quoted literal including its delimiters.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\'` and `\\`. Any other escape is
/// malformed.
pub fn decode_string(raw: &str) -> Result<String, LexErrorKind> {
    let body = strip_delimiters(raw, '\'').ok_or(LexErrorKind::UnterminatedLiteral)?;
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('\'') => '\'',
            Some('\\') => '\\',
            _ => return Err(LexErrorKind::MalformedEscape),
        };
        decoded.push(escaped);
    }
    Ok(decoded)
}

/// Decode a slash-delimited regex including its delimiters.
///
/// Only `\/` is rewritten. Every other escape reaches the regex engine as written.
pub fn decode_regex(raw: &str) -> Result<String, LexErrorKind> {
    let body = strip_delimiters(raw, '/').ok_or(LexErrorKind::UnterminatedRegex)?;
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('/') => decoded.push('/'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => return Err(LexErrorKind::UnterminatedRegex),
        }
    }
    Ok(decoded)
}

/// Returns the body between the delimiters, or `None` when the closing
/// delimiter is missing. A trailing delimiter preceded by an odd run of
/// backslashes is escaped and does not close the literal.
fn strip_delimiters(raw: &str, delimiter: char) -> Option<&str> {
    let inner = raw.strip_prefix(delimiter)?;
    let body = inner.strip_suffix(delimiter)?;
    let backslashes = body.chars().rev().take_while(|c| *c == '\\').count();
    (backslashes % 2 == 0).then_some(body)
}

pub(super) fn string_literal(lex: &mut Lexer<Token>) -> Result<String, LexErrorKind> {
    decode_string(lex.slice())
}

pub(super) fn regex_literal(lex: &mut Lexer<Token>) -> Result<String, LexErrorKind> {
    decode_regex(lex.slice())
}

pub(super) fn integer(lex: &mut Lexer<Token>) -> Result<u32, LexErrorKind> {
    lex.slice()
        .parse()
        .map_err(|_| LexErrorKind::IntegerOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_escapes() {
        assert_eq!(decode_string(r"'a\tb'"), Ok("a\tb".to_string()));
        assert_eq!(decode_string(r"'\\'"), Ok("\\".to_string()));
        assert_eq!(decode_string(r"'\''"), Ok("'".to_string()));
        assert_eq!(decode_string("''"), Ok(String::new()));
    }

    #[test]
    fn test_decode_string_rejects_unknown_escape() {
        assert_eq!(decode_string(r"'\d'"), Err(LexErrorKind::MalformedEscape));
    }

    #[test]
    fn test_decode_string_requires_closing_quote() {
        assert_eq!(decode_string("'abc"), Err(LexErrorKind::UnterminatedLiteral));
        assert_eq!(decode_string("'"), Err(LexErrorKind::UnterminatedLiteral));
        assert_eq!(decode_string(r"'ab\'"), Err(LexErrorKind::UnterminatedLiteral));
    }

    #[test]
    fn test_decode_regex() {
        assert_eq!(decode_regex(r"/\d+/"), Ok(r"\d+".to_string()));
        assert_eq!(decode_regex(r"/a\/b/"), Ok("a/b".to_string()));
        assert_eq!(decode_regex(r"/a\\/"), Ok(r"a\\".to_string()));
        assert_eq!(decode_regex("/abc"), Err(LexErrorKind::UnterminatedRegex));
        assert_eq!(decode_regex(r"/abc\/"), Err(LexErrorKind::UnterminatedRegex));
    }
}
