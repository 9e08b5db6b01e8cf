//! Declarations
//!
//! A token declaration is `NAME : token_expr ;`. A rule declaration starts with
//! a header, `$main [name]`, `$skip [strategy]` or a rule name, followed by
//! `: rule_expr ;`. The header decides which [Declaration] the block becomes.

use chumsky::prelude::*;

use super::error::ParseError;
use super::primitives::{keyword, rule_name, token_name};
use super::rule_expr::rule_expr;
use super::token_expr::token_expr;
use crate::sbnf::lexing::Token;
use crate::sbnf::spec::{Declaration, RuleName, SkipStrategy, Spanned};

#[derive(Debug, Clone, PartialEq)]
enum RuleHeader {
    Main(Option<RuleName>),
    Skip(SkipStrategy),
    Named(RuleName),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Greed {
    Greedy,
    Lazy,
}

/// One declaration of either kind, with the byte span it covers.
pub fn declaration() -> impl Parser<Token, Spanned<Declaration>, Error = ParseError> + Clone {
    choice((token_def(), rule_def())).map_with_span(Spanned::new)
}

pub fn token_def() -> impl Parser<Token, Declaration, Error = ParseError> + Clone {
    token_name()
        .then_ignore(just(Token::Colon))
        .then(token_expr())
        .then_ignore(just(Token::Semicolon))
        .map(|(name, pattern)| Declaration::Token { name, pattern })
}

pub fn rule_def() -> impl Parser<Token, Declaration, Error = ParseError> + Clone {
    rule_header()
        .then_ignore(just(Token::Colon))
        .then(rule_expr())
        .then_ignore(just(Token::Semicolon))
        .map(|(header, rule)| match header {
            RuleHeader::Main(name) => Declaration::Main { name, rule },
            RuleHeader::Skip(strategy) => Declaration::Skip { strategy, rule },
            RuleHeader::Named(name) => Declaration::Rule { name, rule },
        })
}

fn rule_header() -> impl Parser<Token, RuleHeader, Error = ParseError> + Clone {
    let directive = just(Token::Dollar).ignore_then(choice((
        keyword("main")
            .ignore_then(rule_name().or_not())
            .map(RuleHeader::Main),
        keyword("skip")
            .ignore_then(skip_strategy())
            .map(RuleHeader::Skip),
    )));

    choice((directive, rule_name().map(RuleHeader::Named)))
}

/// `(before | after) (greedy | lazy)?`, or nothing for the default.
pub fn skip_strategy() -> impl Parser<Token, SkipStrategy, Error = ParseError> + Clone {
    let side = choice((
        keyword("before").to(Side::Before),
        keyword("after").to(Side::After),
    ));
    let greed = choice((
        keyword("greedy").to(Greed::Greedy),
        keyword("lazy").to(Greed::Lazy),
    ));

    side.then(greed.or_not()).or_not().map(|strategy| match strategy {
        None | Some((Side::Before, None)) => SkipStrategy::SkipBefore,
        Some((Side::Before, Some(Greed::Greedy))) => SkipStrategy::SkipBeforeGreedy,
        Some((Side::Before, Some(Greed::Lazy))) => SkipStrategy::SkipBeforeLazy,
        Some((Side::After, None)) => SkipStrategy::SkipAfter,
        Some((Side::After, Some(Greed::Greedy))) => SkipStrategy::SkipAfterGreedy,
        Some((Side::After, Some(Greed::Lazy))) => SkipStrategy::SkipAfterLazy,
    })
}
