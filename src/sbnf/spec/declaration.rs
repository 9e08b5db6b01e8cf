//! Top-level declarations
//!
//! A source file is an ordered list of declarations. Each one is handed to the
//! builder exactly once, in source order.

use super::{RuleName, RuleSpec, TokenName, TokenPatternSpec};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// How insignificant input is consumed around pattern attempts.
///
/// "Before"/"after" is relative to attempting the next match, "greedy"/"lazy"
/// says whether skipping consumes as much as possible or the minimum before
/// backtracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipStrategy {
    SkipBeforeGreedy,
    SkipBeforeLazy,
    #[default]
    SkipBefore,
    SkipAfterGreedy,
    SkipAfterLazy,
    SkipAfter,
}

impl SkipStrategy {
    /// Keywords following `$skip` that select this strategy. The default has
    /// none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SkipStrategy::SkipBeforeGreedy => &["before", "greedy"],
            SkipStrategy::SkipBeforeLazy => &["before", "lazy"],
            SkipStrategy::SkipBefore => &[],
            SkipStrategy::SkipAfterGreedy => &["after", "greedy"],
            SkipStrategy::SkipAfterLazy => &["after", "lazy"],
            SkipStrategy::SkipAfter => &["after"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "declaration")]
pub enum Declaration {
    /// `NAME : token_expr ;`
    Token {
        name: TokenName,
        pattern: TokenPatternSpec,
    },
    /// `name : rule_expr ;`
    Rule { name: RuleName, rule: RuleSpec },
    /// `$main [name] : rule_expr ;` A missing name asks the builder to
    /// synthesize the default main rule.
    Main {
        name: Option<RuleName>,
        rule: RuleSpec,
    },
    /// `$skip [strategy] : rule_expr ;`
    Skip {
        strategy: SkipStrategy,
        rule: RuleSpec,
    },
}

impl Declaration {
    /// Short human description used in logs and resolution errors.
    pub fn describe(&self) -> String {
        match self {
            Declaration::Token { name, .. } => format!("token {}", name),
            Declaration::Rule { name, .. } => format!("rule {}", name),
            Declaration::Main { name: Some(name), .. } => format!("$main {}", name),
            Declaration::Main { name: None, .. } => "$main".to_string(),
            Declaration::Skip { .. } => "$skip".to_string(),
        }
    }
}

/// A value together with the byte range of source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Range<usize>,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Range<usize>) -> Self {
        Self { node, span }
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}..{}", self.node, self.span.start, self.span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_has_no_keywords() {
        assert_eq!(SkipStrategy::default(), SkipStrategy::SkipBefore);
        assert!(SkipStrategy::default().keywords().is_empty());
        assert_eq!(SkipStrategy::SkipAfterLazy.keywords(), &["after", "lazy"]);
    }

    #[test]
    fn test_describe() {
        let decl = Declaration::Main {
            name: None,
            rule: RuleSpec::reference("expr"),
        };
        assert_eq!(decl.describe(), "$main");
        let decl = Declaration::Token {
            name: TokenName::new("NUMBER"),
            pattern: TokenPatternSpec::regex(r"\d+"),
        };
        assert_eq!(decl.describe(), "token NUMBER");
    }
}
