//! # sbnf
//!
//! A compiler for SBNF, a small notation for declaring the tokens and rules of
//! a grammar.
//!
//! ```text
//! $skip : WS ;
//! $main : expr EOF ;
//! NUMBER : /\d+/ ;
//! expr : NUMBER % '+' + ;
//! ```
//!
//! [compile] turns such text into a [SpecTable] of declarations, or into
//! [Diagnostics] listing every declaration that failed.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](sbnf::testing). Tests use
//! the curated samples and the fluent table assertions found there.

pub mod sbnf;

pub use sbnf::builder::{GrammarBuilder, ResolveError, SpecTable};
pub use sbnf::compiler::{compile, compile_into, compile_with, CompileOptions, CompiledSpecification};
pub use sbnf::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use sbnf::spec::{
    BuiltinToken, Declaration, NumberKind, Quantifier, RuleName, RuleSpec, SkipStrategy,
    TokenName, TokenPatternSpec,
};
