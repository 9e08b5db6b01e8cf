//! SBNF tokens
//!
//! Whitespace and `#` comments are skipped by the lexer itself and never show
//! up as tokens. Keywords such as `main` or `lazy` are plain rule names here.
use logos::Logos;
use std::fmt;

use super::common::LexErrorKind;
use super::escapes::{integer, regex_literal, string_literal};

/// All possible tokens in SBNF source
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"([ \t\r\n\f]+|#[^\r\n]*)")]
pub enum Token {
    // Names: the case of the first letter picks the namespace
    #[regex(r"\p{Lu}[\p{L}\p{Nd}_]*", |lex| lex.slice().to_owned())]
    TokenName(String),
    #[regex(r"\p{Ll}[\p{L}\p{Nd}_]*", |lex| lex.slice().to_owned())]
    RuleName(String),

    // Literals, stored decoded. The closing delimiter is optional in the
    // pattern so an unterminated literal reaches the callback and is reported.
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'?", string_literal)]
    StringLiteral(String),
    #[regex(r"/([^/\\\r\n]|\\[^\r\n])*/?", regex_literal)]
    Regex(String),

    // Quantifier bounds
    #[regex(r"[0-9]+", integer)]
    Integer(u32),

    // Punctuation
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("..")]
    DotDot,
    #[token("$")]
    Dollar,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TokenName(name) | Token::RuleName(name) => f.write_str(name),
            Token::StringLiteral(text) => write!(f, "'{}'", text.escape_default()),
            Token::Regex(pattern) => write!(f, "/{}/", pattern),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Colon => f.write_str(":"),
            Token::Semicolon => f.write_str(";"),
            Token::Pipe => f.write_str("|"),
            Token::Percent => f.write_str("%"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Question => f.write_str("?"),
            Token::Star => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::DotDot => f.write_str(".."),
            Token::Dollar => f.write_str("$"),
        }
    }
}
