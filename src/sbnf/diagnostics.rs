//! Compile diagnostics
//!
//! Every failure a compile run survives is collected here: lexical errors from
//! the tokenizer, syntax and range errors from declarations the recovery
//! driver skipped over. [Diagnostics] is the aggregate handed back as the
//! `Err` of a compile. It is ordered by source offset and keeps one entry per
//! offset, the first one recorded.

pub mod location;

pub use location::{Position, SourceLocation};

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::sbnf::lexing::LexError;
use crate::sbnf::parsing::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Range,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticKind::Lexical => "lexical",
            DiagnosticKind::Syntax => "syntax",
            DiagnosticKind::Range => "range",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Range<usize>,
    pub message: String,
    /// What the parser would have accepted. Empty for lexical errors.
    pub expected: Vec<String>,
    pub found: Option<String>,
}

impl Diagnostic {
    pub fn location(&self, source: &str) -> Position {
        SourceLocation::new(source).position(self.span.start)
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexical,
            span: error.span.clone(),
            message: error.kind.to_string(),
            expected: Vec::new(),
            found: None,
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        let kind = match error.kind() {
            ParseErrorKind::InvalidRange { .. } => DiagnosticKind::Range,
            ParseErrorKind::Unexpected | ParseErrorKind::MixedLiteralChoice => {
                DiagnosticKind::Syntax
            }
        };
        let (expected, found) = match error.kind() {
            ParseErrorKind::Unexpected => {
                (error.expected_set(), Some(error.found_description()))
            }
            _ => (Vec::new(), None),
        };
        Diagnostic {
            kind,
            span: error.span(),
            message: error.to_string(),
            expected,
            found,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error at {}..{}: {}",
            self.kind, self.span.start, self.span.end, self.message
        )
    }
}

/// The aggregate compile error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Order by offset and drop later entries that start where an earlier one
    /// does.
    pub fn new(mut items: Vec<Diagnostic>) -> Self {
        items.sort_by_key(|d| d.span.start);
        items.dedup_by_key(|d| d.span.start);
        Diagnostics { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.items.first()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Keep the first `max` entries. Zero keeps everything.
    pub fn truncated(mut self, max: usize) -> Self {
        if max > 0 {
            self.items.truncate(max);
        }
        self
    }

    /// Human readable report with numbered source lines around each error.
    pub fn render(&self, source: &str, context_lines: usize) -> String {
        let index = SourceLocation::new(source);
        let mut out = String::new();
        for diagnostic in &self.items {
            let position = index.position(diagnostic.span.start);
            out.push_str(&format!(
                "error[{}] {}: {}\n",
                diagnostic.kind, position, diagnostic.message
            ));
            out.push_str(&index.context(position.line, context_lines));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.len() {
            1 => write!(f, "1 compile error")?,
            n => write!(f, "{} compile errors", n)?,
        }
        for diagnostic in &self.items {
            write!(f, "\n  {}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Diagnostics::new(iter.into_iter().collect())
    }
}
