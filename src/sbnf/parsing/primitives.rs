//! Single-token parsers shared by every grammar layer.

use chumsky::prelude::*;

use super::error::ParseError;
use crate::sbnf::lexing::Token;
use crate::sbnf::spec::{RuleName, TokenName};

pub(crate) fn token_name() -> impl Parser<Token, TokenName, Error = ParseError> + Clone {
    filter_map(|span, token| match token {
        Token::TokenName(name) => Ok(TokenName::new(name)),
        other => Err(ParseError::expected(span, "token name", Some(other))),
    })
}

pub(crate) fn rule_name() -> impl Parser<Token, RuleName, Error = ParseError> + Clone {
    filter_map(|span, token| match token {
        Token::RuleName(name) => Ok(RuleName::new(name)),
        other => Err(ParseError::expected(span, "rule name", Some(other))),
    })
}

pub(crate) fn string_literal() -> impl Parser<Token, String, Error = ParseError> + Clone {
    filter_map(|span, token| match token {
        Token::StringLiteral(text) => Ok(text),
        other => Err(ParseError::expected(span, "string literal", Some(other))),
    })
}

pub(crate) fn regex_literal() -> impl Parser<Token, String, Error = ParseError> + Clone {
    filter_map(|span, token| match token {
        Token::Regex(pattern) => Ok(pattern),
        other => Err(ParseError::expected(span, "regex", Some(other))),
    })
}

pub(crate) fn integer() -> impl Parser<Token, u32, Error = ParseError> + Clone {
    filter_map(|span, token| match token {
        Token::Integer(n) => Ok(n),
        other => Err(ParseError::expected(span, "integer", Some(other))),
    })
}

/// A contextual keyword. Keywords lex as rule names.
pub(crate) fn keyword(word: &'static str) -> impl Parser<Token, (), Error = ParseError> + Clone {
    just(Token::RuleName(word.to_owned()))
        .ignored()
        .labelled(word)
}

/// One or more string literals separated by `|`.
pub(crate) fn string_alternatives() -> impl Parser<Token, Vec<String>, Error = ParseError> + Clone
{
    string_literal()
        .then(just(Token::Pipe).ignore_then(string_literal()).repeated())
        .map(|(first, rest)| {
            let mut alternatives = Vec::with_capacity(rest.len() + 1);
            alternatives.push(first);
            alternatives.extend(rest);
            alternatives
        })
}

/// Run `parser` over a token slice carrying byte spans.
pub(crate) fn parse_tokens<O, P>(
    parser: &P,
    tokens: &[(Token, std::ops::Range<usize>)],
    end_offset: usize,
) -> Result<O, Vec<ParseError>>
where
    P: Parser<Token, O, Error = ParseError>,
{
    let stream = chumsky::Stream::from_iter(end_offset..end_offset, tokens.iter().cloned());
    parser.parse(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbnf::lexing::tokenize;

    fn run<O, P: Parser<Token, O, Error = ParseError>>(parser: P, source: &str) -> Result<O, Vec<ParseError>> {
        let tokens = tokenize(source).tokens;
        parse_tokens(&parser.then_ignore(end()), &tokens, source.len())
    }

    #[test]
    fn test_names() {
        assert_eq!(run(token_name(), "NUMBER"), Ok(TokenName::new("NUMBER")));
        assert_eq!(run(rule_name(), "expr"), Ok(RuleName::new("expr")));
        let errors = run(token_name(), "expr").unwrap_err();
        assert_eq!(errors[0].expected_set(), vec!["token name"]);
        assert_eq!(errors[0].span(), 0..4);
    }

    #[test]
    fn test_keyword_is_contextual() {
        assert_eq!(run(keyword("main"), "main"), Ok(()));
        let errors = run(keyword("main"), "mains").unwrap_err();
        assert_eq!(errors[0].expected_set(), vec!["main"]);
    }

    #[test]
    fn test_string_alternatives() {
        assert_eq!(
            run(string_alternatives(), "'a' | 'b' | 'c'"),
            Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(run(string_alternatives(), "'+'"), Ok(vec!["+".to_string()]));
    }

    #[test]
    fn test_error_at_end_of_input_uses_end_offset() {
        let errors = run(integer(), "").unwrap_err();
        assert_eq!(errors[0].span(), 0..0);
        assert!(errors[0].found().is_none());
    }
}
