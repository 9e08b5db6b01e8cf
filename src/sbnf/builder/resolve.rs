//! Name resolution over a [SpecTable].
//!
//! Checks that every reference names a declaration of the right namespace,
//! that no name is claimed twice, that a main rule exists and that regex
//! bodies compile. Cycles are not checked.

use std::fmt;

use super::table::{Conflict, SpecTable};
use crate::sbnf::spec::{Declaration, RuleSpec, TokenPatternSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    DuplicateToken { name: String },
    DuplicateRule { name: String },
    MainNameClash { name: String },
    DuplicateMain,
    DuplicateSkip,
    MissingMain,
    UndefinedToken { name: String, referenced_by: String },
    UndefinedRule { name: String, referenced_by: String },
    InvalidRegex { pattern: String, message: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::DuplicateToken { name } => write!(f, "token {} is declared more than once", name),
            ResolveError::DuplicateRule { name } => write!(f, "rule {} is declared more than once", name),
            ResolveError::MainNameClash { name } => {
                write!(f, "$main {} clashes with a rule of the same name", name)
            }
            ResolveError::DuplicateMain => f.write_str("more than one $main declaration"),
            ResolveError::DuplicateSkip => f.write_str("more than one $skip declaration"),
            ResolveError::MissingMain => f.write_str("no $main declaration"),
            ResolveError::UndefinedToken { name, referenced_by } => {
                write!(f, "undefined token {} referenced by {}", name, referenced_by)
            }
            ResolveError::UndefinedRule { name, referenced_by } => {
                write!(f, "undefined rule {} referenced by {}", name, referenced_by)
            }
            ResolveError::InvalidRegex { pattern, message } => {
                write!(f, "invalid regex /{}/: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<&Conflict> for ResolveError {
    fn from(conflict: &Conflict) -> Self {
        match conflict {
            Conflict::Token(name) => ResolveError::DuplicateToken {
                name: name.to_string(),
            },
            Conflict::Rule(name) => ResolveError::DuplicateRule {
                name: name.to_string(),
            },
            Conflict::MainName(name) => ResolveError::MainNameClash {
                name: name.to_string(),
            },
            Conflict::Main => ResolveError::DuplicateMain,
            Conflict::Skip => ResolveError::DuplicateSkip,
        }
    }
}

impl SpecTable {
    /// Every resolution problem in the table. Empty means the table is ready
    /// to be turned into a grammar.
    pub fn resolve(&self) -> Vec<ResolveError> {
        let mut errors: Vec<ResolveError> = self.conflicts.iter().map(ResolveError::from).collect();

        if self.main().is_none() {
            errors.push(ResolveError::MissingMain);
        }

        for declaration in self.declarations() {
            let owner = declaration.describe();
            match declaration {
                Declaration::Token { pattern, .. } => self.check_pattern(pattern, &owner, &mut errors),
                Declaration::Rule { rule, .. }
                | Declaration::Main { rule, .. }
                | Declaration::Skip { rule, .. } => self.check_rule(rule, &owner, &mut errors),
            }
        }

        errors
    }

    fn check_rule(&self, rule: &RuleSpec, owner: &str, errors: &mut Vec<ResolveError>) {
        for node in rule.walk() {
            match node {
                RuleSpec::Ref(name) if !self.has_rule(name.as_str()) => {
                    errors.push(ResolveError::UndefinedRule {
                        name: name.to_string(),
                        referenced_by: owner.to_string(),
                    });
                }
                RuleSpec::Token(pattern) => self.check_pattern(pattern, owner, errors),
                _ => {}
            }
        }
    }

    fn check_pattern(&self, pattern: &TokenPatternSpec, owner: &str, errors: &mut Vec<ResolveError>) {
        for node in pattern.walk() {
            match node {
                TokenPatternSpec::Ref(name) if !self.has_token(name.as_str()) => {
                    errors.push(ResolveError::UndefinedToken {
                        name: name.to_string(),
                        referenced_by: owner.to_string(),
                    });
                }
                TokenPatternSpec::Regex(body) => {
                    if let Err(error) = regex::Regex::new(body) {
                        errors.push(ResolveError::InvalidRegex {
                            pattern: body.clone(),
                            message: error.to_string(),
                        });
                    }
                }
                _ => {}
            }
        }
    }
}
