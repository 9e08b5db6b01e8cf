//! Token expressions
//!
//! The term layer of a token expression is a parenthesised group, a token
//! name, a `$` leaf (`$identifier`, `$keyword ...`, `$number ...`), a regex or
//! a quoted literal choice. Everything above the term comes from
//! [layers](super::layers).

use chumsky::prelude::*;

use super::error::ParseError;
use super::layers::layers;
use super::primitives::{keyword, regex_literal, string_alternatives, string_literal, token_name};
use crate::sbnf::lexing::Token;
use crate::sbnf::spec::{NumberKind, TokenPatternSpec};

/// A complete token expression.
pub fn token_expr() -> impl Parser<Token, TokenPatternSpec, Error = ParseError> + Clone {
    recursive(|expr| layers(token_term(expr)))
}

/// The tightest-binding token form. `expr` parses the inside of a group.
pub(crate) fn token_term<P>(expr: P) -> impl Parser<Token, TokenPatternSpec, Error = ParseError> + Clone
where
    P: Parser<Token, TokenPatternSpec, Error = ParseError> + Clone,
{
    token_term_forms(expr).labelled("token expression")
}

/// [token_term] without its label, for callers that label the position
/// themselves.
pub(crate) fn token_term_forms<P>(
    expr: P,
) -> impl Parser<Token, TokenPatternSpec, Error = ParseError> + Clone
where
    P: Parser<Token, TokenPatternSpec, Error = ParseError> + Clone,
{
    let group = expr.delimited_by(just(Token::LParen), just(Token::RParen));

    let reference = token_name().map(TokenPatternSpec::Ref);

    let leaf = just(Token::Dollar).ignore_then(choice((
        keyword("identifier").to(TokenPatternSpec::Identifier),
        keyword("keyword").ignore_then(keyword_pattern()),
        keyword("number")
            .ignore_then(number_kind())
            .map(TokenPatternSpec::Number),
    )));

    let regex = regex_literal().map(TokenPatternSpec::Regex);

    choice((group, reference, leaf, regex, literal_choice()))
}

/// `'a' | 'b' ...` classified as literals or keywords by their last character.
fn literal_choice() -> impl Parser<Token, TokenPatternSpec, Error = ParseError> + Clone {
    string_alternatives().try_map(|alternatives, span| {
        TokenPatternSpec::from_literals(alternatives)
            .ok_or_else(|| ParseError::mixed_literal_choice(span))
    })
}

/// After `$keyword`: either `choice 'a' | 'b' ...` or a single literal.
fn keyword_pattern() -> impl Parser<Token, TokenPatternSpec, Error = ParseError> + Clone {
    choice((
        keyword("choice")
            .ignore_then(string_alternatives())
            .map(TokenPatternSpec::KeywordChoice),
        string_literal().map(TokenPatternSpec::Keyword),
    ))
}

fn number_kind() -> impl Parser<Token, NumberKind, Error = ParseError> + Clone {
    choice((
        keyword(NumberKind::Integer.keyword()).to(NumberKind::Integer),
        keyword(NumberKind::Float.keyword()).to(NumberKind::Float),
        keyword(NumberKind::Double.keyword()).to(NumberKind::Double),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbnf::lexing::tokenize;
    use crate::sbnf::parsing::error::ParseErrorKind;
    use crate::sbnf::parsing::primitives::parse_tokens;
    use crate::sbnf::spec::Quantifier;

    fn parse(source: &str) -> Result<TokenPatternSpec, Vec<ParseError>> {
        let lexed = tokenize(source);
        assert!(lexed.errors.is_empty(), "lex errors in {:?}", source);
        parse_tokens(&token_expr().then_ignore(end()), &lexed.tokens, source.len())
    }

    fn lit(text: &str) -> TokenPatternSpec {
        TokenPatternSpec::literal(text)
    }

    #[test]
    fn test_leaves() {
        assert_eq!(parse("NUMBER"), Ok(TokenPatternSpec::reference("NUMBER")));
        assert_eq!(parse(r"/\d+/"), Ok(TokenPatternSpec::regex(r"\d+")));
        assert_eq!(parse("$identifier"), Ok(TokenPatternSpec::Identifier));
        assert_eq!(parse("$number float"), Ok(TokenPatternSpec::Number(NumberKind::Float)));
        assert_eq!(parse("$keyword 'if'"), Ok(TokenPatternSpec::keyword("if")));
    }

    #[test]
    fn test_keyword_choice_leaf() {
        assert_eq!(
            parse("$keyword choice 'if' | 'else'"),
            Ok(TokenPatternSpec::KeywordChoice(vec!["if".into(), "else".into()]))
        );
        assert_eq!(
            parse("$keyword choice 'x'"),
            Ok(TokenPatternSpec::KeywordChoice(vec!["x".into()]))
        );
    }

    #[test]
    fn test_literal_classification() {
        assert_eq!(parse("'if'"), Ok(TokenPatternSpec::keyword("if")));
        assert_eq!(parse("'+'"), Ok(lit("+")));
        assert_eq!(parse("''"), Ok(lit("")));
        assert_eq!(
            parse("'+' | '-'"),
            Ok(TokenPatternSpec::LiteralChoice(vec!["+".into(), "-".into()]))
        );
        assert_eq!(
            parse("'true' | 'false'"),
            Ok(TokenPatternSpec::KeywordChoice(vec!["true".into(), "false".into()]))
        );
    }

    #[test]
    fn test_mixed_literal_choice_is_rejected() {
        let errors = parse("'if' | '+'").unwrap_err();
        assert_eq!(errors[0].kind(), &ParseErrorKind::MixedLiteralChoice);
        assert_eq!(errors[0].span(), 0..10);
    }

    #[test]
    fn test_sequence_and_choice() {
        assert_eq!(
            parse("A B | C"),
            Ok(TokenPatternSpec::Choice(vec![
                TokenPatternSpec::Sequence(vec![
                    TokenPatternSpec::reference("A"),
                    TokenPatternSpec::reference("B"),
                ]),
                TokenPatternSpec::reference("C"),
            ]))
        );
    }

    #[test]
    fn test_single_elements_are_not_wrapped() {
        assert_eq!(parse("(A)"), Ok(TokenPatternSpec::reference("A")));
        assert_eq!(parse("((A))"), Ok(TokenPatternSpec::reference("A")));
    }

    #[test]
    fn test_quantifiers_bind_tighter_than_sequence() {
        assert_eq!(
            parse("A B?"),
            Ok(TokenPatternSpec::Sequence(vec![
                TokenPatternSpec::reference("A"),
                TokenPatternSpec::Optional(Box::new(TokenPatternSpec::reference("B"))),
            ]))
        );
        assert_eq!(
            parse("(A B){2..}"),
            Ok(TokenPatternSpec::Repeat {
                child: Box::new(TokenPatternSpec::Sequence(vec![
                    TokenPatternSpec::reference("A"),
                    TokenPatternSpec::reference("B"),
                ])),
                quantifier: Quantifier::at_least(2),
            })
        );
    }

    #[test]
    fn test_separated_repeat_folds_left() {
        let inner = TokenPatternSpec::SeparatedRepeat {
            child: Box::new(TokenPatternSpec::reference("A")),
            separator: Box::new(TokenPatternSpec::reference("B")),
            quantifier: Quantifier::at_least(1),
        };
        assert_eq!(
            parse("A % B{1..} % C?"),
            Ok(TokenPatternSpec::SeparatedRepeat {
                child: Box::new(inner),
                separator: Box::new(TokenPatternSpec::reference("C")),
                quantifier: Quantifier::OPTIONAL,
            })
        );
    }

    #[test]
    fn test_separator_requires_quantifier() {
        assert!(parse("A % B").is_err());
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let errors = parse("()").unwrap_err();
        assert_eq!(errors[0].expected_set(), vec!["token expression"]);
    }
}
