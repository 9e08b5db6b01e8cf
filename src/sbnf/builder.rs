//! Registration seam between the compiler and whoever builds the grammar.
//!
//! The compiler never resolves names. It hands each parsed declaration, in
//! source order, to a [GrammarBuilder]. [SpecTable] is the in-memory builder
//! this crate ships; it indexes declarations by name, adds the baseline tokens
//! and runs the name-resolution pass.

pub mod resolve;
pub mod table;

pub use resolve::ResolveError;
pub use table::SpecTable;

use crate::sbnf::spec::{Declaration, RuleName, RuleSpec, SkipStrategy, TokenName, TokenPatternSpec};

/// Receiver of compiled declarations.
///
/// Duplicate names and unresolved references are the builder's business. A
/// builder used for a failed compile holds a partial grammar and should be
/// discarded.
pub trait GrammarBuilder {
    fn declare_token(&mut self, name: TokenName, pattern: TokenPatternSpec);

    fn declare_rule(&mut self, name: RuleName, rule: RuleSpec);

    /// `name` is `None` when the builder should synthesize the main rule.
    fn declare_main(&mut self, name: Option<RuleName>, rule: RuleSpec);

    fn declare_skip(&mut self, strategy: SkipStrategy, rule: RuleSpec);

    fn declare(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Token { name, pattern } => self.declare_token(name, pattern),
            Declaration::Rule { name, rule } => self.declare_rule(name, rule),
            Declaration::Main { name, rule } => self.declare_main(name, rule),
            Declaration::Skip { strategy, rule } => self.declare_skip(strategy, rule),
        }
    }
}

/// Collects declarations without interpreting them.
impl GrammarBuilder for Vec<Declaration> {
    fn declare_token(&mut self, name: TokenName, pattern: TokenPatternSpec) {
        self.push(Declaration::Token { name, pattern });
    }

    fn declare_rule(&mut self, name: RuleName, rule: RuleSpec) {
        self.push(Declaration::Rule { name, rule });
    }

    fn declare_main(&mut self, name: Option<RuleName>, rule: RuleSpec) {
        self.push(Declaration::Main { name, rule });
    }

    fn declare_skip(&mut self, strategy: SkipStrategy, rule: RuleSpec) {
        self.push(Declaration::Skip { strategy, rule });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_dispatches_by_kind() {
        let mut collected: Vec<Declaration> = Vec::new();
        let skip = Declaration::Skip {
            strategy: SkipStrategy::SkipAfter,
            rule: RuleSpec::token_ref("WS"),
        };
        collected.declare(skip.clone());
        collected.declare_token(TokenName::new("A"), TokenPatternSpec::literal("a"));
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0], skip);
    }
}
