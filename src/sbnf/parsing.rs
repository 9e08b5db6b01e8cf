//! Parser
//!
//! The SBNF grammar is written directly with chumsky combinators over the
//! logos token stream.
//!
//! Structure:
//!
//!     primitives      single-token parsers (names, literals, contextual keywords)
//!     quantifier      ? * + {m} {m..} {m..n}
//!     layers          term, separated repeat, quantifier, sequence, choice
//!     token_expr      token terms plugged into the layers
//!     rule_expr       rule terms (rule names, groups, inline token terms)
//!     declarations    token_def, rule_def and its headers
//!     recovery        the per-declaration driver, see [parse_source]
//!
//! Errors are [ParseError] values, a chumsky error that also knows about
//! inverted quantifier ranges and mixed literal choices.

pub mod declarations;
pub mod error;
pub(crate) mod layers;
pub(crate) mod primitives;
pub mod quantifier;
pub mod recovery;
pub mod rule_expr;
pub mod token_expr;

pub use declarations::{declaration, rule_def, skip_strategy, token_def};
pub use error::{ParseError, ParseErrorKind};
pub use quantifier::{quantifier, resolve_quantifier};
pub use recovery::{parse_declaration, parse_source, ParsedSource};
pub use rule_expr::rule_expr;
pub use token_expr::token_expr;
