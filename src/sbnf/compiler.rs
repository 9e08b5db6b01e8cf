//! Compile entry points
//!
//! [compile] is the usual way in: SBNF text goes in, a [SpecTable] with the
//! baseline tokens added comes out, or the aggregated [Diagnostics] when any
//! declaration failed. [compile_into] registers into a caller-supplied
//! [GrammarBuilder] instead.

use log::{debug, info};
use sbnf_config::CompileConfig;

use crate::sbnf::builder::{GrammarBuilder, SpecTable};
use crate::sbnf::diagnostics::Diagnostics;
use crate::sbnf::parsing::parse_source;

/// Alias kept for callers that think of the table as the compiled result.
pub type CompiledSpecification = SpecTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Add `EOF`, `WS`, `SPACES` and `NEWLINE` after a successful compile.
    pub register_builtins: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            register_builtins: true,
        }
    }
}

impl From<&CompileConfig> for CompileOptions {
    fn from(config: &CompileConfig) -> Self {
        CompileOptions {
            register_builtins: config.register_builtins,
        }
    }
}

pub fn compile(source: &str) -> Result<CompiledSpecification, Diagnostics> {
    compile_with(source, &CompileOptions::default())
}

pub fn compile_with(
    source: &str,
    options: &CompileOptions,
) -> Result<CompiledSpecification, Diagnostics> {
    let mut table = SpecTable::new();
    compile_into(source, &mut table)?;
    if options.register_builtins {
        let added = table.register_builtins();
        debug!("registered {} baseline tokens", added);
    }
    Ok(table)
}

/// Register every declaration of `source` into `builder`, in source order.
///
/// Declarations that parsed are registered even when others failed, so on
/// `Err` the builder holds a partial grammar and should be thrown away.
pub fn compile_into<B>(source: &str, builder: &mut B) -> Result<(), Diagnostics>
where
    B: GrammarBuilder + ?Sized,
{
    let parsed = parse_source(source);

    for decl in parsed.declarations {
        debug!("registering {}", decl.node.describe());
        builder.declare(decl.node);
    }

    if parsed.diagnostics.is_empty() {
        Ok(())
    } else {
        info!("compile failed with {} diagnostics", parsed.diagnostics.len());
        Err(parsed.diagnostics)
    }
}
