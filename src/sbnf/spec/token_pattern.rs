//! Token-level patterns
//!
//! Token patterns match atomic terminals: literals, keywords, identifiers,
//! numbers and regexes, and compositions of those.

use super::{Composite, Quantifier, TokenName};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Numeric shapes available through `$number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Integer,
    Float,
    Double,
}

impl NumberKind {
    /// Spelling used after `$number`.
    pub fn keyword(&self) -> &'static str {
        match self {
            NumberKind::Integer => "int",
            NumberKind::Float => "float",
            NumberKind::Double => "double",
        }
    }
}

/// Tokens every compiled grammar may reference without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinToken {
    /// End of input.
    Eof,
    /// A run of any whitespace.
    Whitespaces,
    /// A run of spaces and tabs.
    Spaces,
    /// A single line break.
    Newline,
}

impl BuiltinToken {
    pub const ALL: [BuiltinToken; 4] = [
        BuiltinToken::Eof,
        BuiltinToken::Whitespaces,
        BuiltinToken::Spaces,
        BuiltinToken::Newline,
    ];

    /// Token name the builtin is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinToken::Eof => "EOF",
            BuiltinToken::Whitespaces => "WS",
            BuiltinToken::Spaces => "SPACES",
            BuiltinToken::Newline => "NEWLINE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum TokenPatternSpec {
    /// Reference to a token declared elsewhere, resolved by the builder.
    Ref(TokenName),
    Literal(String),
    LiteralChoice(Vec<String>),
    /// Exact text followed by a word boundary, so `'if'` does not match `ifx`.
    Keyword(String),
    KeywordChoice(Vec<String>),
    Identifier,
    Number(NumberKind),
    Regex(String),
    Builtin(BuiltinToken),
    Sequence(Vec<TokenPatternSpec>),
    /// First matching alternative wins.
    Choice(Vec<TokenPatternSpec>),
    Optional(Box<TokenPatternSpec>),
    Repeat {
        child: Box<TokenPatternSpec>,
        quantifier: Quantifier,
    },
    SeparatedRepeat {
        child: Box<TokenPatternSpec>,
        separator: Box<TokenPatternSpec>,
        quantifier: Quantifier,
    },
}

impl TokenPatternSpec {
    pub fn reference(name: impl Into<String>) -> Self {
        TokenPatternSpec::Ref(TokenName::new(name))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        TokenPatternSpec::Literal(text.into())
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        TokenPatternSpec::Keyword(text.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        TokenPatternSpec::Regex(pattern.into())
    }

    /// Classify the alternatives of a quoted literal choice.
    ///
    /// When every alternative ends in a word character the choice is made of
    /// keywords, when none does it is made of plain literals. A single
    /// alternative collapses to `Keyword`/`Literal`. Mixed endings return
    /// `None`.
    pub fn from_literals(mut alternatives: Vec<String>) -> Option<Self> {
        let words = alternatives
            .iter()
            .filter(|text| ends_with_word_char(text))
            .count();

        let keywords = if words == alternatives.len() && !alternatives.is_empty() {
            true
        } else if words == 0 {
            false
        } else {
            return None;
        };

        Some(match (alternatives.len(), keywords) {
            (1, true) => TokenPatternSpec::Keyword(alternatives.remove(0)),
            (1, false) => TokenPatternSpec::Literal(alternatives.remove(0)),
            (_, true) => TokenPatternSpec::KeywordChoice(alternatives),
            (_, false) => TokenPatternSpec::LiteralChoice(alternatives),
        })
    }

    /// Direct sub-patterns, in source order.
    pub fn children(&self) -> Vec<&TokenPatternSpec> {
        match self {
            TokenPatternSpec::Sequence(items) | TokenPatternSpec::Choice(items) => {
                items.iter().collect()
            }
            TokenPatternSpec::Optional(child) | TokenPatternSpec::Repeat { child, .. } => {
                vec![child.as_ref()]
            }
            TokenPatternSpec::SeparatedRepeat {
                child, separator, ..
            } => vec![child.as_ref(), separator.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Every pattern in this tree, this one included, depth first.
    pub fn walk(&self) -> Vec<&TokenPatternSpec> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(pattern) = stack.pop() {
            out.push(pattern);
            stack.extend(pattern.children().into_iter().rev());
        }
        out
    }
}

static WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}_]\z").expect("word ending pattern compiles"));

/// Word characters are letters, decimal digits and `_`, the classes names
/// are lexed with.
pub fn ends_with_word_char(text: &str) -> bool {
    WORD_END.is_match(text)
}

impl Composite for TokenPatternSpec {
    fn sequence(elements: Vec<Self>) -> Self {
        TokenPatternSpec::Sequence(elements)
    }

    fn choice(alternatives: Vec<Self>) -> Self {
        TokenPatternSpec::Choice(alternatives)
    }

    fn optional(child: Self) -> Self {
        TokenPatternSpec::Optional(Box::new(child))
    }

    fn repeat(child: Self, quantifier: Quantifier) -> Self {
        TokenPatternSpec::Repeat {
            child: Box::new(child),
            quantifier,
        }
    }

    fn separated_repeat(child: Self, separator: Self, quantifier: Quantifier) -> Self {
        TokenPatternSpec::SeparatedRepeat {
            child: Box::new(child),
            separator: Box::new(separator),
            quantifier,
        }
    }
}
