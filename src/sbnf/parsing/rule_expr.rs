//! Rule expressions
//!
//! Same layers as token expressions. A rule term is a group, a rule name, or
//! any token term lifted into a [RuleSpec::Token] leaf, so inline patterns
//! such as `'(' expr ')'` need no separate token declaration. Groups recurse
//! into the rule grammar, which means `(A b)` is a rule-level sequence.

use chumsky::prelude::*;

use super::error::ParseError;
use super::layers::layers;
use super::primitives::rule_name;
use super::token_expr::{token_expr, token_term_forms};
use crate::sbnf::lexing::Token;
use crate::sbnf::spec::RuleSpec;

pub fn rule_expr() -> impl Parser<Token, RuleSpec, Error = ParseError> + Clone {
    recursive(|expr| layers(rule_term(expr)))
}

fn rule_term<P>(expr: P) -> impl Parser<Token, RuleSpec, Error = ParseError> + Clone
where
    P: Parser<Token, RuleSpec, Error = ParseError> + Clone,
{
    choice((
        expr.delimited_by(just(Token::LParen), just(Token::RParen)),
        rule_name().map(RuleSpec::Ref),
        token_term_forms(token_expr()).map(RuleSpec::Token),
    ))
    .labelled("rule expression")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbnf::lexing::tokenize;
    use crate::sbnf::parsing::primitives::parse_tokens;
    use crate::sbnf::spec::{Quantifier, TokenPatternSpec};

    fn parse(source: &str) -> Result<RuleSpec, Vec<ParseError>> {
        let lexed = tokenize(source);
        parse_tokens(&rule_expr().then_ignore(end()), &lexed.tokens, source.len())
    }

    #[test]
    fn test_bare_reference() {
        assert_eq!(parse("term"), Ok(RuleSpec::reference("term")));
    }

    #[test]
    fn test_token_leaves() {
        assert_eq!(
            parse("NUMBER | '(' expression ')'"),
            Ok(RuleSpec::Choice(vec![
                RuleSpec::token_ref("NUMBER"),
                RuleSpec::Sequence(vec![
                    RuleSpec::Token(TokenPatternSpec::literal("(")),
                    RuleSpec::reference("expression"),
                    RuleSpec::Token(TokenPatternSpec::literal(")")),
                ]),
            ]))
        );
    }

    #[test]
    fn test_groups_stay_at_rule_level() {
        assert_eq!(
            parse("(A b)*"),
            Ok(RuleSpec::Repeat {
                child: Box::new(RuleSpec::Sequence(vec![
                    RuleSpec::token_ref("A"),
                    RuleSpec::reference("b"),
                ])),
                quantifier: Quantifier::ZERO_OR_MORE,
            })
        );
    }

    #[test]
    fn test_separated_repeat_with_token_separator() {
        assert_eq!(
            parse("NUMBER % '+' +"),
            Ok(RuleSpec::SeparatedRepeat {
                child: Box::new(RuleSpec::token_ref("NUMBER")),
                separator: Box::new(RuleSpec::Token(TokenPatternSpec::literal("+"))),
                quantifier: Quantifier::ONE_OR_MORE,
            })
        );
    }

    #[test]
    fn test_inline_leaf_forms() {
        assert_eq!(
            parse("$identifier '=' value"),
            Ok(RuleSpec::Sequence(vec![
                RuleSpec::Token(TokenPatternSpec::Identifier),
                RuleSpec::Token(TokenPatternSpec::literal("=")),
                RuleSpec::reference("value"),
            ]))
        );
    }

    #[test]
    fn test_missing_expression() {
        let errors = parse("").unwrap_err();
        assert_eq!(errors[0].expected_set(), vec!["rule expression"]);
    }
}
