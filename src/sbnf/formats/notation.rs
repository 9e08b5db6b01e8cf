//! SBNF pretty printer
//!
//! Prints specification trees back as SBNF text. Parentheses are added only
//! where the grammar's binding strength needs them, so compiling the printed
//! text gives back the same tree.

use std::fmt;

use crate::sbnf::builder::SpecTable;
use crate::sbnf::spec::token_pattern::ends_with_word_char;
use crate::sbnf::spec::{Declaration, Quantifier, RuleSpec, TokenPatternSpec};

/// Binding strength, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Choice,
    Sequence,
    Quantified,
    SeparatedRepeat,
    Term,
}

/// The composition forms both trees share, seen from the printer.
enum Shape<'a, T> {
    Leaf,
    Sequence(&'a [T]),
    Choice(&'a [T]),
    Optional(&'a T),
    Repeat(&'a T, Quantifier),
    SeparatedRepeat(&'a T, &'a T, Quantifier),
}

trait Printable: Sized {
    fn shape(&self) -> Shape<'_, Self>;

    /// Write a node whose shape is [Shape::Leaf].
    fn write_leaf(&self, out: &mut String);

    /// Whether the printed text ends in a quoted string, in which case a
    /// following `| 'x'` would be read as part of a literal choice.
    fn ends_with_string(&self) -> bool;

    fn level(&self) -> Level {
        match self.shape() {
            Shape::Leaf => Level::Term,
            Shape::Sequence(_) => Level::Sequence,
            Shape::Choice(_) => Level::Choice,
            Shape::Optional(_) | Shape::Repeat(..) => Level::Quantified,
            Shape::SeparatedRepeat(..) => Level::SeparatedRepeat,
        }
    }
}

fn write_at<T: Printable>(node: &T, min: Level, out: &mut String) {
    if node.level() < min {
        out.push('(');
        write_node(node, out);
        out.push(')');
    } else {
        write_node(node, out);
    }
}

fn write_node<T: Printable>(node: &T, out: &mut String) {
    match node.shape() {
        Shape::Leaf => node.write_leaf(out),
        Shape::Sequence(elements) => {
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_at(element, Level::Quantified, out);
            }
        }
        Shape::Choice(alternatives) => {
            let last = alternatives.len().saturating_sub(1);
            for (i, alternative) in alternatives.iter().enumerate() {
                if i > 0 {
                    out.push_str(" | ");
                }
                if i < last && alternative.ends_with_string() {
                    out.push('(');
                    write_node(alternative, out);
                    out.push(')');
                } else {
                    write_at(alternative, Level::Sequence, out);
                }
            }
        }
        Shape::Optional(child) => {
            write_at(child, Level::SeparatedRepeat, out);
            out.push('?');
        }
        Shape::Repeat(child, quantifier) => {
            write_at(child, Level::SeparatedRepeat, out);
            out.push_str(&quantifier.to_string());
        }
        Shape::SeparatedRepeat(child, separator, quantifier) => {
            write_at(child, Level::SeparatedRepeat, out);
            out.push_str(" % ");
            write_at(separator, Level::Term, out);
            out.push_str(&quantifier.to_string());
        }
    }
}

fn last_ends_with_string<T: Printable>(elements: &[T]) -> bool {
    elements
        .last()
        .map_or(false, |last| last.level() >= Level::Quantified && last.ends_with_string())
}

impl Printable for TokenPatternSpec {
    fn shape(&self) -> Shape<'_, Self> {
        match self {
            TokenPatternSpec::Sequence(elements) => Shape::Sequence(elements.as_slice()),
            TokenPatternSpec::Choice(alternatives) => Shape::Choice(alternatives.as_slice()),
            TokenPatternSpec::Optional(child) => Shape::Optional(child.as_ref()),
            TokenPatternSpec::Repeat { child, quantifier } => Shape::Repeat(child.as_ref(), *quantifier),
            TokenPatternSpec::SeparatedRepeat {
                child,
                separator,
                quantifier,
            } => Shape::SeparatedRepeat(child.as_ref(), separator.as_ref(), *quantifier),
            _ => Shape::Leaf,
        }
    }

    fn write_leaf(&self, out: &mut String) {
        match self {
            TokenPatternSpec::Ref(name) => out.push_str(name.as_str()),
            TokenPatternSpec::Literal(text) => out.push_str(&quote(text)),
            TokenPatternSpec::LiteralChoice(alternatives) => out.push_str(&quote_all(alternatives)),
            TokenPatternSpec::Keyword(text) if ends_with_word_char(text) => {
                out.push_str(&quote(text))
            }
            TokenPatternSpec::Keyword(text) => {
                out.push_str("$keyword ");
                out.push_str(&quote(text));
            }
            TokenPatternSpec::KeywordChoice(alternatives)
                if alternatives.len() > 1 && alternatives.iter().all(|a| ends_with_word_char(a)) =>
            {
                out.push_str(&quote_all(alternatives))
            }
            TokenPatternSpec::KeywordChoice(alternatives) => {
                out.push_str("$keyword choice ");
                out.push_str(&quote_all(alternatives));
            }
            TokenPatternSpec::Identifier => out.push_str("$identifier"),
            TokenPatternSpec::Number(kind) => {
                out.push_str("$number ");
                out.push_str(kind.keyword());
            }
            TokenPatternSpec::Regex(pattern) => {
                out.push('/');
                out.push_str(&pattern.replace('/', "\\/"));
                out.push('/');
            }
            TokenPatternSpec::Builtin(builtin) => {
                out.push_str(&format!("<builtin {}>", builtin.name()))
            }
            composite => write_node(composite, out),
        }
    }

    fn ends_with_string(&self) -> bool {
        match self {
            TokenPatternSpec::Literal(_)
            | TokenPatternSpec::LiteralChoice(_)
            | TokenPatternSpec::Keyword(_)
            | TokenPatternSpec::KeywordChoice(_) => true,
            TokenPatternSpec::Sequence(elements) => last_ends_with_string(elements),
            _ => false,
        }
    }
}

impl Printable for RuleSpec {
    fn shape(&self) -> Shape<'_, Self> {
        match self {
            RuleSpec::Sequence(elements) => Shape::Sequence(elements.as_slice()),
            RuleSpec::Choice(alternatives) => Shape::Choice(alternatives.as_slice()),
            RuleSpec::Optional(child) => Shape::Optional(child.as_ref()),
            RuleSpec::Repeat { child, quantifier } => Shape::Repeat(child.as_ref(), *quantifier),
            RuleSpec::SeparatedRepeat {
                child,
                separator,
                quantifier,
            } => Shape::SeparatedRepeat(child.as_ref(), separator.as_ref(), *quantifier),
            RuleSpec::Ref(_) | RuleSpec::Token(_) => Shape::Leaf,
        }
    }

    fn write_leaf(&self, out: &mut String) {
        match self {
            RuleSpec::Ref(name) => out.push_str(name.as_str()),
            RuleSpec::Token(pattern) => write_at(pattern, Level::Term, out),
            composite => write_node(composite, out),
        }
    }

    fn ends_with_string(&self) -> bool {
        match self {
            RuleSpec::Token(pattern) => pattern.level() == Level::Term && pattern.ends_with_string(),
            RuleSpec::Sequence(elements) => last_ends_with_string(elements),
            _ => false,
        }
    }
}

/// Quote and escape a literal the way the lexer reads it back.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn quote_all(alternatives: &[String]) -> String {
    alternatives
        .iter()
        .map(|a| quote(a))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render<T: Printable>(node: &T) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

impl fmt::Display for TokenPatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Token { name, pattern } => write!(f, "{} : {} ;", name, pattern),
            Declaration::Rule { name, rule } => write!(f, "{} : {} ;", name, rule),
            Declaration::Main { name: None, rule } => write!(f, "$main : {} ;", rule),
            Declaration::Main {
                name: Some(name),
                rule,
            } => write!(f, "$main {} : {} ;", name, rule),
            Declaration::Skip { strategy, rule } => {
                f.write_str("$skip")?;
                for keyword in strategy.keywords() {
                    write!(f, " {}", keyword)?;
                }
                write!(f, " : {} ;", rule)
            }
        }
    }
}

/// Print every author-written declaration of `table`, one per line.
/// Baseline tokens are left out.
pub fn to_sbnf(table: &SpecTable) -> String {
    table
        .declarations()
        .iter()
        .filter(|decl| {
            !matches!(
                decl,
                Declaration::Token {
                    pattern: TokenPatternSpec::Builtin(_),
                    ..
                }
            )
        })
        .map(|decl| format!("{}\n", decl))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbnf::spec::{NumberKind, SkipStrategy, TokenName};

    fn lit(text: &str) -> TokenPatternSpec {
        TokenPatternSpec::literal(text)
    }

    fn r(name: &str) -> TokenPatternSpec {
        TokenPatternSpec::reference(name)
    }

    #[test]
    fn test_leaves() {
        assert_eq!(lit("it's\n").to_string(), r"'it\'s\n'");
        assert_eq!(TokenPatternSpec::keyword("if").to_string(), "'if'");
        assert_eq!(TokenPatternSpec::keyword("+").to_string(), "$keyword '+'");
        assert_eq!(TokenPatternSpec::regex(r"a/b\d").to_string(), r"/a\/b\d/");
        assert_eq!(TokenPatternSpec::Number(NumberKind::Double).to_string(), "$number double");
        assert_eq!(
            TokenPatternSpec::KeywordChoice(vec!["x".into()]).to_string(),
            "$keyword choice 'x'"
        );
    }

    #[test]
    fn test_parenthesises_by_level() {
        let seq = TokenPatternSpec::Sequence(vec![r("A"), r("B")]);
        let choice = TokenPatternSpec::Choice(vec![seq.clone(), r("C")]);
        assert_eq!(choice.to_string(), "A B | C");

        let repeated = TokenPatternSpec::Repeat {
            child: Box::new(choice),
            quantifier: Quantifier::between(2, 3).unwrap(),
        };
        assert_eq!(repeated.to_string(), "(A B | C){2..3}");

        let nested = TokenPatternSpec::Sequence(vec![seq, r("D")]);
        assert_eq!(nested.to_string(), "(A B) D");
    }

    #[test]
    fn test_separated_repeat() {
        let inner = TokenPatternSpec::SeparatedRepeat {
            child: Box::new(r("A")),
            separator: Box::new(TokenPatternSpec::Sequence(vec![r("B"), r("C")])),
            quantifier: Quantifier::ONE_OR_MORE,
        };
        let outer = TokenPatternSpec::SeparatedRepeat {
            child: Box::new(inner),
            separator: Box::new(lit(",")),
            quantifier: Quantifier::OPTIONAL,
        };
        assert_eq!(outer.to_string(), "A % (B C)+ % ','?");
    }

    #[test]
    fn test_string_ending_alternatives_are_grouped() {
        let choice = TokenPatternSpec::Choice(vec![lit("+"), lit("-")]);
        assert_eq!(choice.to_string(), "('+') | '-'");

        let rule = RuleSpec::Choice(vec![
            RuleSpec::Sequence(vec![
                RuleSpec::reference("a"),
                RuleSpec::Token(lit(";")),
            ]),
            RuleSpec::reference("b"),
        ]);
        assert_eq!(rule.to_string(), "(a ';') | b");
    }

    #[test]
    fn test_declarations() {
        let decl = Declaration::Skip {
            strategy: SkipStrategy::SkipAfterLazy,
            rule: RuleSpec::token_ref("WS"),
        };
        assert_eq!(decl.to_string(), "$skip after lazy : WS ;");
        let decl = Declaration::Token {
            name: TokenName::new("NUMBER"),
            pattern: TokenPatternSpec::regex(r"\d+"),
        };
        assert_eq!(decl.to_string(), r"NUMBER : /\d+/ ;");
    }
}
