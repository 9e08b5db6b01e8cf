//! Precedence layers shared by token and rule expressions.
//!
//! From tightest to loosest binding:
//!
//!     term
//!     separated repeat   term (% term quantifier)*, folded left
//!     quantifier         at most one suffix
//!     sequence           one or more, a single element stands alone
//!     choice             sequences separated by |, a single one stands alone

use chumsky::prelude::*;

use super::error::ParseError;
use super::quantifier::quantifier;
use crate::sbnf::lexing::Token;
use crate::sbnf::spec::Composite;

/// Build the full expression grammar over `term`.
pub(crate) fn layers<T, P>(term: P) -> impl Parser<Token, T, Error = ParseError> + Clone
where
    T: Composite + Clone,
    P: Parser<Token, T, Error = ParseError> + Clone,
{
    let separated = term
        .clone()
        .then(
            just(Token::Percent)
                .ignore_then(term)
                .then(quantifier())
                .repeated(),
        )
        .foldl(|child, (separator, quantifier)| T::separated_repeat(child, separator, quantifier));

    let quantified = separated
        .then(quantifier().or_not())
        .map(|(child, suffix)| match suffix {
            Some(quantifier) => T::quantified(child, quantifier),
            None => child,
        });

    let sequence = quantified.repeated().at_least(1).map(T::sequence_of);

    sequence
        .clone()
        .then(just(Token::Pipe).ignore_then(sequence).repeated())
        .map(|(first, rest)| {
            let mut alternatives = Vec::with_capacity(rest.len() + 1);
            alternatives.push(first);
            alternatives.extend(rest);
            T::choice_of(alternatives)
        })
}
