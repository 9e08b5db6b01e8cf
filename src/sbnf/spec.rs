//! Specification tree produced by the compiler
//!
//! Compiling SBNF text never builds an executable grammar. It builds a tree of
//! closed sum types that name every token and rule, with references kept as
//! plain names so that a declaration may mention something declared further
//! down the file. Turning names into handles is the business of whoever
//! receives the tree (see [builder](crate::sbnf::builder)).
//!
//! Layers
//!
//!     Token patterns ([TokenPatternSpec]) describe atomic terminals. Rules
//!     ([RuleSpec]) compose token patterns and other rules; any token pattern
//!     may appear inside a rule as a [RuleSpec::Token] leaf.
//!
//!     Both trees share the same four composition forms (sequence, choice,
//!     quantified and separated repetition). The [Composite] trait captures that
//!     shape so the expression grammar can be written once for both.

pub mod declaration;
pub mod names;
pub mod quantifier;
pub mod rule;
pub mod token_pattern;

pub use declaration::{Declaration, SkipStrategy, Spanned};
pub use names::{RuleName, TokenName};
pub use quantifier::Quantifier;
pub use rule::RuleSpec;
pub use token_pattern::{BuiltinToken, NumberKind, TokenPatternSpec};

/// Composition forms shared by token patterns and rules.
pub trait Composite: Sized {
    fn sequence(elements: Vec<Self>) -> Self;
    fn choice(alternatives: Vec<Self>) -> Self;
    fn optional(child: Self) -> Self;
    fn repeat(child: Self, quantifier: Quantifier) -> Self;
    fn separated_repeat(child: Self, separator: Self, quantifier: Quantifier) -> Self;

    /// Apply a quantifier suffix. `{0..1}` becomes an optional, every other
    /// bound a repeat.
    fn quantified(child: Self, quantifier: Quantifier) -> Self {
        if quantifier.is_optional() {
            Self::optional(child)
        } else {
            Self::repeat(child, quantifier)
        }
    }

    /// Build a sequence, handing back a lone element unwrapped.
    fn sequence_of(elements: Vec<Self>) -> Self {
        collapse(elements, Self::sequence)
    }

    /// Build a choice, handing back a lone alternative unwrapped.
    fn choice_of(alternatives: Vec<Self>) -> Self {
        collapse(alternatives, Self::choice)
    }
}

fn collapse<T>(mut items: Vec<T>, wrap: impl FnOnce(Vec<T>) -> T) -> T {
    if items.len() == 1 {
        items.remove(0)
    } else {
        wrap(items)
    }
}
