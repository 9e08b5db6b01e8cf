//! Main module for the SBNF compiler
//!
//! Pipeline: [lexing] turns text into tokens, [parsing] turns tokens into
//! declarations (recovering after each failed one), [compiler] registers them
//! with a [builder] and reports [diagnostics]. [formats] prints tables back.

pub mod builder;
pub mod compiler;
pub mod diagnostics;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod spec;
pub mod testing;
