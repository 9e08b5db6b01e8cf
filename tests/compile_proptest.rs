//! Property-based tests for the compiler
//!
//! Generated names, quantifiers and literal choices are compiled and the
//! resulting declarations checked against what was written.

use proptest::prelude::*;
use sbnf::sbnf::parsing::quantifier::resolve_quantifier;
use sbnf::sbnf::spec::token_pattern::ends_with_word_char;
use sbnf::{compile, compile_with, CompileOptions, Declaration, DiagnosticKind, TokenPatternSpec};

fn bare() -> CompileOptions {
    CompileOptions {
        register_builtins: false,
    }
}

fn literal_text() -> impl Strategy<Value = String> {
    "[a-z0-9_+*<>=.-]{1,4}"
}

proptest! {
    #[test]
    fn bounded_range_resolves_or_is_rejected(min in 0u32..1000, max in 0u32..1000) {
        let result = resolve_quantifier(&format!("{{{}..{}}}", min, max));
        if min <= max {
            let quantifier = result.unwrap().unwrap();
            prop_assert_eq!(quantifier.min(), min);
            prop_assert_eq!(quantifier.max(), Some(max));
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn uppercase_names_declare_tokens(name in "[A-Z][A-Za-z0-9_]{0,8}") {
        let table = compile_with(&format!("{} : 'x' ;", name), &bare()).unwrap();
        let is_token = matches!(
            &table.declarations()[0],
            Declaration::Token { name: declared, .. } if declared.as_str() == name
        );
        prop_assert!(is_token);
    }

    #[test]
    fn lowercase_names_declare_rules(name in "[a-z][A-Za-z0-9_]{0,8}") {
        let table = compile_with(&format!("{} : other ;", name), &bare()).unwrap();
        let is_rule = matches!(
            &table.declarations()[0],
            Declaration::Rule { name: declared, .. } if declared.as_str() == name
        );
        prop_assert!(is_rule);
    }

    #[test]
    fn literal_choice_is_keyword_only_when_every_alternative_ends_in_a_word(
        alternatives in prop::collection::vec(literal_text(), 1..5)
    ) {
        let body = alternatives
            .iter()
            .map(|a| format!("'{}'", a))
            .collect::<Vec<_>>()
            .join(" | ");
        let words = alternatives.iter().filter(|a| ends_with_word_char(a)).count();

        match compile_with(&format!("T : {} ;", body), &bare()) {
            Ok(table) => {
                let pattern = table.token("T").cloned();
                if words == alternatives.len() {
                    let is_keyword = matches!(
                        pattern,
                        Some(TokenPatternSpec::Keyword(_)) | Some(TokenPatternSpec::KeywordChoice(_))
                    );
                    prop_assert!(is_keyword);
                } else {
                    prop_assert_eq!(words, 0);
                    let is_literal = matches!(
                        pattern,
                        Some(TokenPatternSpec::Literal(_)) | Some(TokenPatternSpec::LiteralChoice(_))
                    );
                    prop_assert!(is_literal);
                }
            }
            Err(diagnostics) => {
                prop_assert!(words > 0 && words < alternatives.len());
                prop_assert_eq!(diagnostics.len(), 1);
                prop_assert_eq!(diagnostics.count(DiagnosticKind::Syntax), 1);
            }
        }
    }

    #[test]
    fn compile_never_panics(source in "\\PC{0,64}") {
        let _ = compile(&source);
    }

    #[test]
    fn compile_never_panics_on_sbnf_fragments(
        fragments in prop::collection::vec(
            prop::sample::select(vec![
                "A", "b", ":", ";", "|", "%", "(", ")", "?", "*", "+", "{2..1}", "{1..}",
                "'x'", "'+'", "/re/", "$main", "$skip", "after", "lazy", "$", "keyword",
                "choice", "number", "int", "'", "/", "@",
            ]),
            0..24,
        )
    ) {
        let source = fragments.join(" ");
        if let Err(diagnostics) = compile(&source) {
            prop_assert!(!diagnostics.is_empty());
        }
    }
}
