//! Parser error type
//!
//! chumsky's `Simple` error cannot tell a bad quantifier range from an ordinary
//! unexpected token, so the grammar reports through this type instead. It keeps
//! the expected set as human readable descriptions, ready for diagnostics.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use crate::sbnf::lexing::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token at the span is not one the grammar accepts there.
    Unexpected,
    /// `{min..max}` with `max < min`.
    InvalidRange { min: u32, max: u32 },
    /// A quoted literal choice mixing word-ending and symbol-ending alternatives.
    MixedLiteralChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    span: Range<usize>,
    expected: BTreeSet<String>,
    found: Option<Token>,
    label: Option<&'static str>,
}

impl ParseError {
    fn new(kind: ParseErrorKind, span: Range<usize>) -> Self {
        ParseError {
            kind,
            span,
            expected: BTreeSet::new(),
            found: None,
            label: None,
        }
    }

    /// An unexpected-token error whose expected set is a single description.
    pub(crate) fn expected(span: Range<usize>, what: &'static str, found: Option<Token>) -> Self {
        let mut error = ParseError::new(ParseErrorKind::Unexpected, span);
        error.expected.insert(what.to_string());
        error.found = found;
        error
    }

    pub(crate) fn invalid_range(span: Range<usize>, min: u32, max: u32) -> Self {
        ParseError::new(ParseErrorKind::InvalidRange { min, max }, span)
    }

    pub(crate) fn mixed_literal_choice(span: Range<usize>) -> Self {
        ParseError::new(ParseErrorKind::MixedLiteralChoice, span)
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Descriptions of what would have been accepted, sorted.
    pub fn expected_set(&self) -> Vec<String> {
        self.expected.iter().cloned().collect()
    }

    pub fn found(&self) -> Option<&Token> {
        self.found.as_ref()
    }

    /// How the offending input reads in a message.
    pub fn found_description(&self) -> String {
        describe_found(self.found.as_ref())
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    fn is_custom(&self) -> bool {
        self.kind != ParseErrorKind::Unexpected
    }
}

impl chumsky::Error<Token> for ParseError {
    type Span = Range<usize>;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<Token>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<Token>,
    ) -> Self {
        let mut error = ParseError::new(ParseErrorKind::Unexpected, span);
        error.expected = expected.into_iter().map(|t| describe_expected(t.as_ref())).collect();
        error.found = found;
        error
    }

    /// The innermost label wins. Labelling replaces the raw token set with
    /// the label so messages talk about "rule expression" rather than
    /// listing every token that may start one. Once any merged part carries
    /// a label the union is kept and enclosing labels leave it alone.
    fn with_label(mut self, label: Self::Label) -> Self {
        if self.label.is_none() && !self.is_custom() {
            self.label = Some(label);
            self.expected.clear();
            self.expected.insert(label.to_string());
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        match (self.is_custom(), other.is_custom()) {
            (false, true) => other,
            (true, _) => self,
            (false, false) => {
                self.label = self.label.or(other.label);
                self.expected.extend(other.expected);
                if self.found.is_none() {
                    self.found = other.found;
                }
                self
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Unexpected => {
                write!(f, "unexpected {}", self.found_description())?;
                match self.expected.len() {
                    0 => Ok(()),
                    1 => write!(f, ", expected {}", join(&self.expected)),
                    _ => write!(f, ", expected one of {}", join(&self.expected)),
                }
            }
            ParseErrorKind::InvalidRange { min, max } => write!(
                f,
                "invalid repetition range {{{}..{}}}: upper bound is below lower bound",
                min, max
            ),
            ParseErrorKind::MixedLiteralChoice => f.write_str(
                "literal choice mixes alternatives ending in a word character with alternatives that do not",
            ),
        }
    }
}

impl std::error::Error for ParseError {}

fn join(items: &BTreeSet<String>) -> String {
    items.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Token classes are named, punctuation is quoted.
pub(crate) fn describe_expected(token: Option<&Token>) -> String {
    match token {
        None => "end of input".to_string(),
        Some(Token::TokenName(_)) => "token name".to_string(),
        Some(Token::RuleName(name)) => name.clone(),
        Some(Token::StringLiteral(_)) => "string literal".to_string(),
        Some(Token::Regex(_)) => "regex".to_string(),
        Some(Token::Integer(_)) => "integer".to_string(),
        Some(punct) => format!("'{}'", punct),
    }
}

pub(crate) fn describe_found(token: Option<&Token>) -> String {
    match token {
        None => "end of input".to_string(),
        Some(t @ (Token::StringLiteral(_) | Token::Regex(_))) => t.to_string(),
        Some(t) => format!("'{}'", t),
    }
}
