//! Lexer
//!
//! This module turns SBNF source into classified fragments with byte offsets.
//!
//! Structure:
//!     Tokenization is done entirely by the logos lexer declared in [tokens].
//!     Whitespace and `#` comments are skipped by logos itself, so the parser
//!     never sees them. Escape decoding for quoted strings and slash-delimited
//!     regexes runs as logos callbacks ([escapes]).
//!
//! Keywords
//!
//!     SBNF has no reserved words. `main`, `skip`, `before`, `identifier` and
//!     friends lex as ordinary rule names and only mean something after `$` or
//!     inside a `$skip` header, which keeps the lexer context free.
//!
//! Errors
//!
//!     A fragment logos cannot classify, or whose escapes do not decode, is
//!     reported as a [LexError] and left out of the token stream. The recovery
//!     driver voids any declaration that overlaps such a fragment, see
//!     [recovery](crate::sbnf::parsing::recovery).

pub mod common;
pub mod escapes;
pub mod tokens;

pub use common::{LexError, LexErrorKind, LexerOutput};
pub use tokens::Token;

use logos::Logos;

/// Lazily lex `source`. Call again to restart from the beginning.
pub fn lexemes(source: &str) -> logos::SpannedIter<'_, Token> {
    Token::lexer(source).spanned()
}

/// Lex the whole source, splitting tokens from lexical errors.
pub fn tokenize(source: &str) -> LexerOutput {
    let mut output = LexerOutput::default();

    for (result, span) in lexemes(source) {
        match result {
            Ok(token) => output.tokens.push((token, span)),
            Err(kind) => output.errors.push(LexError { kind, span }),
        }
    }

    output
}
