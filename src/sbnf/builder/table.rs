//! In-memory specification table.

use serde::Serialize;
use std::collections::HashMap;

use super::GrammarBuilder;
use crate::sbnf::spec::{
    BuiltinToken, Declaration, RuleName, RuleSpec, SkipStrategy, TokenName, TokenPatternSpec,
};

/// A registration that lost to an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Conflict {
    Token(TokenName),
    Rule(RuleName),
    /// `$main name` and a rule declaration share a name.
    MainName(RuleName),
    Main,
    Skip,
}

/// Declarations indexed by name. The first registration of a name wins,
/// later ones are kept in order and reported by [resolve](SpecTable::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecTable {
    declarations: Vec<Declaration>,
    #[serde(skip)]
    tokens: HashMap<TokenName, usize>,
    #[serde(skip)]
    rules: HashMap<RuleName, usize>,
    #[serde(skip)]
    main: Option<usize>,
    #[serde(skip)]
    skip: Option<usize>,
    #[serde(skip)]
    pub(crate) conflicts: Vec<Conflict>,
}

impl SpecTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registered declaration, in registration order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn token(&self, name: &str) -> Option<&TokenPatternSpec> {
        match self.declarations.get(*self.tokens.get(name)?)? {
            Declaration::Token { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// A named rule, including one named by `$main name`.
    pub fn rule(&self, name: &str) -> Option<&RuleSpec> {
        match self.declarations.get(*self.rules.get(name)?)? {
            Declaration::Rule { rule, .. } | Declaration::Main { rule, .. } => Some(rule),
            _ => None,
        }
    }

    pub fn main(&self) -> Option<(Option<&RuleName>, &RuleSpec)> {
        match self.declarations.get(self.main?)? {
            Declaration::Main { name, rule } => Some((name.as_ref(), rule)),
            _ => None,
        }
    }

    pub fn skip(&self) -> Option<(SkipStrategy, &RuleSpec)> {
        match self.declarations.get(self.skip?)? {
            Declaration::Skip { strategy, rule } => Some((*strategy, rule)),
            _ => None,
        }
    }

    pub fn has_token(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Declare the baseline tokens the author did not declare. Returns how
    /// many were added.
    pub fn register_builtins(&mut self) -> usize {
        let mut added = 0;
        for builtin in BuiltinToken::ALL {
            if !self.has_token(builtin.name()) {
                self.declare_token(
                    TokenName::new(builtin.name()),
                    TokenPatternSpec::Builtin(builtin),
                );
                added += 1;
            }
        }
        added
    }

    fn push(&mut self, declaration: Declaration) -> usize {
        self.declarations.push(declaration);
        self.declarations.len() - 1
    }

    fn index_rule(&mut self, name: &RuleName, index: usize, via_main: bool) {
        match self.rules.get(name) {
            None => {
                self.rules.insert(name.clone(), index);
            }
            Some(&existing) => {
                let clash = via_main
                    || matches!(self.declarations.get(existing), Some(Declaration::Main { .. }));
                self.conflicts.push(if clash {
                    Conflict::MainName(name.clone())
                } else {
                    Conflict::Rule(name.clone())
                });
            }
        }
    }
}

impl GrammarBuilder for SpecTable {
    fn declare_token(&mut self, name: TokenName, pattern: TokenPatternSpec) {
        if self.tokens.contains_key(&name) {
            self.conflicts.push(Conflict::Token(name.clone()));
            self.push(Declaration::Token { name, pattern });
            return;
        }
        let index = self.push(Declaration::Token {
            name: name.clone(),
            pattern,
        });
        self.tokens.insert(name, index);
    }

    fn declare_rule(&mut self, name: RuleName, rule: RuleSpec) {
        let index = self.push(Declaration::Rule {
            name: name.clone(),
            rule,
        });
        self.index_rule(&name, index, false);
    }

    fn declare_main(&mut self, name: Option<RuleName>, rule: RuleSpec) {
        let index = self.push(Declaration::Main {
            name: name.clone(),
            rule,
        });
        if self.main.is_some() {
            self.conflicts.push(Conflict::Main);
            return;
        }
        self.main = Some(index);
        if let Some(name) = name {
            self.index_rule(&name, index, true);
        }
    }

    fn declare_skip(&mut self, strategy: SkipStrategy, rule: RuleSpec) {
        let index = self.push(Declaration::Skip { strategy, rule });
        if self.skip.is_some() {
            self.conflicts.push(Conflict::Skip);
            return;
        }
        self.skip = Some(index);
    }
}
