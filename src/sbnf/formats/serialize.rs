//! Structured output of a specification table.
//!
//! Declarations are tagged by `declaration`, pattern nodes by `kind` with
//! their payload under `value`. YAML cannot nest externally tagged enums, so
//! every enum with data uses one of these two forms.

use std::fmt;

use crate::sbnf::builder::SpecTable;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    Json(String),
    Yaml(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Json(msg) => write!(f, "JSON serialization failed: {}", msg),
            FormatError::Yaml(msg) => write!(f, "YAML serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

pub fn to_json(table: &SpecTable) -> Result<String, FormatError> {
    serde_json::to_string_pretty(table).map_err(|e| FormatError::Json(e.to_string()))
}

pub fn to_yaml(table: &SpecTable) -> Result<String, FormatError> {
    serde_yaml::to_string(table).map_err(|e| FormatError::Yaml(e.to_string()))
}
