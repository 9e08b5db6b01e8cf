//! Quantifier suffixes: `?`, `*`, `+`, `{m}`, `{m..}` and `{m..n}`.

use chumsky::prelude::*;

use super::error::ParseError;
use super::primitives::{integer, parse_tokens};
use crate::sbnf::lexing::{tokenize, Token};
use crate::sbnf::spec::Quantifier;

/// One quantifier. Callers wrap it in `or_not()`, a quantifier is always an
/// optional suffix.
pub fn quantifier() -> impl Parser<Token, Quantifier, Error = ParseError> + Clone {
    let bounds = integer()
        .then(just(Token::DotDot).ignore_then(integer().or_not()).or_not())
        .delimited_by(just(Token::LBrace), just(Token::RBrace))
        .try_map(|(min, upper), span| match upper {
            None => Ok(Quantifier::exactly(min)),
            Some(None) => Ok(Quantifier::at_least(min)),
            Some(Some(max)) => {
                Quantifier::between(min, max).ok_or_else(|| ParseError::invalid_range(span, min, max))
            }
        });

    choice((
        just(Token::Question).to(Quantifier::OPTIONAL),
        just(Token::Star).to(Quantifier::ZERO_OR_MORE),
        just(Token::Plus).to(Quantifier::ONE_OR_MORE),
        bounds,
    ))
    .labelled("quantifier")
}

/// Resolve a standalone quantifier spelling. Empty input has no quantifier.
pub fn resolve_quantifier(text: &str) -> Result<Option<Quantifier>, Vec<ParseError>> {
    let lexed = tokenize(text);
    if let Some(error) = lexed.errors.first() {
        return Err(vec![ParseError::expected(error.span.clone(), "quantifier", None)]);
    }
    parse_tokens(&quantifier().or_not().then_ignore(end()), &lexed.tokens, text.len())
}
