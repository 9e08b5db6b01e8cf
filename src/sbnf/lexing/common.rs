//! Common lexer types
//!
//! Output and error types shared by the tokenizer and its callers.

use super::tokens::Token;
use std::fmt;
use std::ops::Range;

/// Output from a lexer run: every classified token plus every fragment that
/// failed to lex, both with byte ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexerOutput {
    pub tokens: Vec<(Token, Range<usize>)>,
    pub errors: Vec<LexError>,
}

/// Reasons a fragment fails to lex. `Default` is required by logos and is used
/// for input no token pattern accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// An escape other than `\n \t \r \' \\` inside a quoted string.
    MalformedEscape,
    /// A quoted string with no closing quote before the end of the line.
    UnterminatedLiteral,
    /// A slash-delimited regex with no closing slash before the end of the line.
    UnterminatedRegex,
    /// A quantifier bound that does not fit in 32 bits.
    IntegerOverflow,
    #[default]
    UnexpectedCharacter,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            LexErrorKind::MalformedEscape => "malformed escape sequence in string literal",
            LexErrorKind::UnterminatedLiteral => "unterminated string literal",
            LexErrorKind::UnterminatedRegex => "unterminated regex literal",
            LexErrorKind::IntegerOverflow => "integer is too large",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        };
        f.write_str(msg)
    }
}

/// A fragment that failed to lex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Range<usize>,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexing error at {}..{}: {}",
            self.span.start, self.span.end, self.kind
        )
    }
}

impl std::error::Error for LexError {}
