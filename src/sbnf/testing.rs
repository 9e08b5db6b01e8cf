//! Testing utilities
//!
//! Tests that need a realistic grammar should take it from [SbnfSamples]
//! rather than inlining SBNF text. The samples live in `docs/samples/` and are
//! embedded at build time, so they are the single place to update when the
//! notation changes.
//!
//! Tables are checked with [assert_table], which names the declaration that
//! differs instead of dumping two whole tables:
//!
//! ```rust-example
//! let table = SbnfSamples::compile("010-math.sbnf");
//! assert_table(&table)
//!     .token("NUMBER", TokenPatternSpec::regex(r"\d+"))
//!     .rule("expression", |rule| matches!(rule, RuleSpec::SeparatedRepeat { .. }))
//!     .main_named(None);
//! ```

use crate::sbnf::builder::SpecTable;
use crate::sbnf::compiler::compile;
use crate::sbnf::diagnostics::Diagnostics;
use crate::sbnf::spec::{RuleSpec, SkipStrategy, TokenPatternSpec};

const SAMPLES: &[(&str, &str)] = &[
    ("010-math.sbnf", include_str!("../../docs/samples/010-math.sbnf")),
    ("020-json.sbnf", include_str!("../../docs/samples/020-json.sbnf")),
    ("030-csv.sbnf", include_str!("../../docs/samples/030-csv.sbnf")),
    (
        "040-directives.sbnf",
        include_str!("../../docs/samples/040-directives.sbnf"),
    ),
    (
        "900-recovery.sbnf",
        include_str!("../../docs/samples/900-recovery.sbnf"),
    ),
];

/// Curated SBNF sources.
pub struct SbnfSamples;

impl SbnfSamples {
    pub fn names() -> impl Iterator<Item = &'static str> {
        SAMPLES.iter().map(|(name, _)| *name)
    }

    pub fn get(name: &str) -> Option<&'static str> {
        SAMPLES
            .iter()
            .find(|(sample, _)| *sample == name)
            .map(|(_, source)| *source)
    }

    /// Samples numbered below 900 compile cleanly.
    pub fn valid() -> impl Iterator<Item = (&'static str, &'static str)> {
        SAMPLES.iter().copied().filter(|(name, _)| !name.starts_with('9'))
    }

    /// The text of a sample. Panics on an unknown name.
    pub fn source(name: &str) -> &'static str {
        match Self::get(name) {
            Some(source) => source,
            None => panic!("unknown sample {}", name),
        }
    }

    /// Compile a sample that is expected to compile.
    pub fn compile(name: &str) -> SpecTable {
        match compile(Self::source(name)) {
            Ok(table) => table,
            Err(diagnostics) => panic!(
                "sample {} failed to compile:\n{}",
                name,
                diagnostics.render(Self::source(name), 1)
            ),
        }
    }

    /// Compile a sample that is expected to fail.
    pub fn diagnostics(name: &str) -> Diagnostics {
        match compile(Self::source(name)) {
            Ok(_) => panic!("sample {} compiled without errors", name),
            Err(diagnostics) => diagnostics,
        }
    }
}

/// Start a fluent assertion over `table`.
pub fn assert_table(table: &SpecTable) -> TableAssertion<'_> {
    TableAssertion { table }
}

pub struct TableAssertion<'a> {
    table: &'a SpecTable,
}

impl<'a> TableAssertion<'a> {
    pub fn token(self, name: &str, expected: TokenPatternSpec) -> Self {
        match self.table.token(name) {
            Some(pattern) => assert_eq!(pattern, &expected, "token {} differs", name),
            None => panic!("token {} is not declared", name),
        }
        self
    }

    pub fn rule_eq(self, name: &str, expected: RuleSpec) -> Self {
        match self.table.rule(name) {
            Some(rule) => assert_eq!(rule, &expected, "rule {} differs", name),
            None => panic!("rule {} is not declared", name),
        }
        self
    }

    /// Check a rule with a predicate, for shapes too large to spell out.
    pub fn rule(self, name: &str, check: impl FnOnce(&RuleSpec) -> bool) -> Self {
        match self.table.rule(name) {
            Some(rule) => assert!(check(rule), "rule {} has an unexpected shape: {}", name, rule),
            None => panic!("rule {} is not declared", name),
        }
        self
    }

    pub fn main_named(self, expected: Option<&str>) -> Self {
        match self.table.main() {
            Some((name, _)) => assert_eq!(name.map(|n| n.as_str()), expected, "$main name differs"),
            None => panic!("no $main declaration"),
        }
        self
    }

    pub fn main_rule(self, expected: RuleSpec) -> Self {
        match self.table.main() {
            Some((_, rule)) => assert_eq!(rule, &expected, "$main rule differs"),
            None => panic!("no $main declaration"),
        }
        self
    }

    pub fn skip(self, strategy: SkipStrategy, expected: RuleSpec) -> Self {
        match self.table.skip() {
            Some((actual, rule)) => {
                assert_eq!(actual, strategy, "$skip strategy differs");
                assert_eq!(rule, &expected, "$skip rule differs");
            }
            None => panic!("no $skip declaration"),
        }
        self
    }

    pub fn declaration_count(self, expected: usize) -> Self {
        assert_eq!(self.table.len(), expected, "declaration count differs");
        self
    }

    pub fn resolves(self) -> Self {
        let errors = self.table.resolve();
        assert!(errors.is_empty(), "unresolved: {:?}", errors);
        self
    }
}
