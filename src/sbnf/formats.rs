//! Output formats for compiled tables: SBNF text, JSON, YAML and the Rust
//! debug representation.

pub mod notation;
pub mod serialize;

pub use notation::{quote, to_sbnf};
pub use serialize::{to_json, to_yaml, FormatError};

use sbnf_config::OutputFormat;

use crate::sbnf::builder::SpecTable;

/// Render `table` in the requested format.
pub fn render_table(table: &SpecTable, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(table),
        OutputFormat::Yaml => to_yaml(table),
        OutputFormat::Sbnf => Ok(to_sbnf(table)),
        OutputFormat::Debug => Ok(format!("{:#?}\n", table.declarations())),
    }
}
