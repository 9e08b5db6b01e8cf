//! Rule-level patterns
//!
//! Rules mirror token patterns one to one, plus a leaf that lifts any token
//! pattern into rule position. This lets an author write
//! `NUMBER | '(' expression ')'` inside a rule without declaring a token for
//! the parentheses.

use super::{Composite, Quantifier, RuleName, TokenPatternSpec};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum RuleSpec {
    /// Reference to a rule declared elsewhere, resolved by the builder.
    Ref(RuleName),
    /// An inline token pattern.
    Token(TokenPatternSpec),
    Sequence(Vec<RuleSpec>),
    Choice(Vec<RuleSpec>),
    Optional(Box<RuleSpec>),
    Repeat {
        child: Box<RuleSpec>,
        quantifier: Quantifier,
    },
    SeparatedRepeat {
        child: Box<RuleSpec>,
        separator: Box<RuleSpec>,
        quantifier: Quantifier,
    },
}

impl RuleSpec {
    pub fn reference(name: impl Into<String>) -> Self {
        RuleSpec::Ref(RuleName::new(name))
    }

    /// Reference to a token, as written inline in a rule.
    pub fn token_ref(name: impl Into<String>) -> Self {
        RuleSpec::Token(TokenPatternSpec::reference(name))
    }

    pub fn children(&self) -> Vec<&RuleSpec> {
        match self {
            RuleSpec::Sequence(items) | RuleSpec::Choice(items) => items.iter().collect(),
            RuleSpec::Optional(child) | RuleSpec::Repeat { child, .. } => vec![child.as_ref()],
            RuleSpec::SeparatedRepeat {
                child, separator, ..
            } => vec![child.as_ref(), separator.as_ref()],
            RuleSpec::Ref(_) | RuleSpec::Token(_) => Vec::new(),
        }
    }

    /// Every rule node in this tree, this one included, depth first.
    pub fn walk(&self) -> Vec<&RuleSpec> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(rule) = stack.pop() {
            out.push(rule);
            stack.extend(rule.children().into_iter().rev());
        }
        out
    }

    /// Inline token patterns, in source order.
    pub fn token_leaves(&self) -> Vec<&TokenPatternSpec> {
        self.walk()
            .into_iter()
            .filter_map(|rule| match rule {
                RuleSpec::Token(pattern) => Some(pattern),
                _ => None,
            })
            .collect()
    }
}

impl Composite for RuleSpec {
    fn sequence(elements: Vec<Self>) -> Self {
        RuleSpec::Sequence(elements)
    }

    fn choice(alternatives: Vec<Self>) -> Self {
        RuleSpec::Choice(alternatives)
    }

    fn optional(child: Self) -> Self {
        RuleSpec::Optional(Box::new(child))
    }

    fn repeat(child: Self, quantifier: Quantifier) -> Self {
        RuleSpec::Repeat {
            child: Box::new(child),
            quantifier,
        }
    }

    fn separated_repeat(child: Self, separator: Self, quantifier: Quantifier) -> Self {
        RuleSpec::SeparatedRepeat {
            child: Box::new(child),
            separator: Box::new(separator),
            quantifier,
        }
    }
}
