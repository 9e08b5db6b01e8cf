//! Declaration-level recovery
//!
//! The declaration parser runs once per declaration over the remaining token
//! slice. When it fails, the failure is recorded and parsing resumes after the
//! next `;`. When no `;` is left, the rest of the file is trailing garbage and
//! one failure covers it.
//!
//! Lexical errors never reach the parser: their fragments are missing from the
//! token stream. Any declaration whose region overlaps such a fragment is
//! voided, parsed or not, so the lexical error is what gets reported for it.
//! A `;` inside such a fragment (an unterminated `'...` or `/...` runs to the
//! end of its line) still ends the broken declaration.

use chumsky::Parser;
use log::{debug, trace, warn};
use std::ops::Range;

use super::declarations::declaration;
use super::error::ParseError;
use super::primitives::parse_tokens;
use crate::sbnf::diagnostics::{Diagnostic, Diagnostics};
use crate::sbnf::lexing::{tokenize, LexError, LexerOutput, Token};
use crate::sbnf::spec::{Declaration, Spanned};

/// Everything recovered from one source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSource {
    /// Declarations that parsed cleanly, in source order.
    pub declarations: Vec<Spanned<Declaration>>,
    pub diagnostics: Diagnostics,
}

impl ParsedSource {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A region the driver skipped and the errors that made it skip.
struct Failure {
    region: Range<usize>,
    errors: Vec<ParseError>,
}

/// Parse every declaration in `source`, recovering after each failure.
pub fn parse_source(source: &str) -> ParsedSource {
    let LexerOutput { mut tokens, errors } = tokenize(source);
    let swallowed = swallowed_semicolons(source, &errors);
    if !swallowed.is_empty() {
        trace!("{} `;` recovered from lexical errors", swallowed.len());
        tokens.extend(swallowed);
        tokens.sort_by_key(|(_, span)| span.start);
    }
    let parser = declaration();

    let mut parsed = Vec::new();
    let mut failures = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        match parse_tokens(&parser, &tokens[pos..], source.len()) {
            Ok(decl) => {
                trace!("parsed {} at {:?}", decl.node.describe(), decl.span);
                pos = resume_after(&tokens, pos, decl.span.end);
                parsed.push(decl);
            }
            Err(errs) => {
                let start = tokens[pos].1.start;
                let (region, next) = match find_semicolon(&tokens, pos) {
                    Some(at) => (start..tokens[at].1.end, at + 1),
                    None => (start..source.len(), tokens.len()),
                };
                trace!("resynchronising at token {} after {:?}", next, region);
                failures.push(Failure {
                    region,
                    errors: errs,
                });
                pos = next;
            }
        }
    }

    assemble(parsed, failures, &errors)
}

/// Every `;` inside a lexical-error fragment, as a token of its own.
fn swallowed_semicolons(source: &str, errors: &[LexError]) -> Vec<(Token, Range<usize>)> {
    errors
        .iter()
        .flat_map(|error| {
            let start = error.span.start;
            source
                .get(error.span.clone())
                .unwrap_or_default()
                .match_indices(';')
                .map(move |(at, _)| (Token::Semicolon, start + at..start + at + 1))
        })
        .collect()
}

fn resume_after(tokens: &[(Token, Range<usize>)], pos: usize, end: usize) -> usize {
    tokens[pos..]
        .iter()
        .position(|(_, span)| span.start >= end)
        .map_or(tokens.len(), |offset| pos + offset)
}

fn find_semicolon(tokens: &[(Token, Range<usize>)], pos: usize) -> Option<usize> {
    tokens[pos..]
        .iter()
        .position(|(token, _)| *token == Token::Semicolon)
        .map(|offset| pos + offset)
}

fn overlaps(region: &Range<usize>, lex_errors: &[LexError]) -> bool {
    lex_errors
        .iter()
        .any(|error| error.span.start < region.end && region.start < error.span.end)
}

fn assemble(
    parsed: Vec<Spanned<Declaration>>,
    failures: Vec<Failure>,
    lex_errors: &[LexError],
) -> ParsedSource {
    let mut reported: Vec<Diagnostic> = lex_errors.iter().map(Diagnostic::from).collect();

    for failure in failures {
        if overlaps(&failure.region, lex_errors) {
            debug!("syntax errors in {:?} superseded by a lexical error", failure.region);
            continue;
        }
        for error in &failure.errors {
            warn!("recovered from: {}", error);
            reported.push(Diagnostic::from(error));
        }
    }

    let declarations = parsed
        .into_iter()
        .filter(|decl| {
            let voided = overlaps(&decl.span, lex_errors);
            if voided {
                warn!("dropping {} containing a lexical error", decl.node.describe());
            }
            !voided
        })
        .collect();

    ParsedSource {
        declarations,
        diagnostics: Diagnostics::new(reported),
    }
}

/// Parse a source that must consist of exactly one declaration.
pub fn parse_declaration(source: &str) -> Result<Spanned<Declaration>, Diagnostics> {
    let LexerOutput { tokens, errors } = tokenize(source);
    if !errors.is_empty() {
        return Err(errors.iter().map(Diagnostic::from).collect());
    }
    parse_tokens(&declaration().then_ignore(chumsky::primitive::end()), &tokens, source.len())
        .map_err(|errs| errs.iter().map(Diagnostic::from).collect())
}
