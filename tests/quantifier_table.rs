//! Quantifier spellings and the bounds they resolve to.

use rstest::rstest;
use sbnf::sbnf::parsing::quantifier::resolve_quantifier;
use sbnf::sbnf::parsing::ParseErrorKind;
use sbnf::Quantifier;

#[rstest]
#[case("", None)]
#[case("?", Some((0, Some(1))))]
#[case("*", Some((0, None)))]
#[case("+", Some((1, None)))]
#[case("{3}", Some((3, Some(3))))]
#[case("{2..}", Some((2, None)))]
#[case("{2..5}", Some((2, Some(5))))]
#[case("{0..1}", Some((0, Some(1))))]
#[case("{ 4 .. 4 }", Some((4, Some(4))))]
#[case("{0}", Some((0, Some(0))))]
fn resolves_quantifier(#[case] text: &str, #[case] expected: Option<(u32, Option<u32>)>) {
    let resolved = resolve_quantifier(text).unwrap();
    assert_eq!(resolved.map(|q| (q.min(), q.max())), expected, "for {:?}", text);
}

#[rstest]
#[case("{5..2}")]
#[case("{1..0}")]
fn rejects_inverted_range(#[case] text: &str) {
    let errors = resolve_quantifier(text).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind(), ParseErrorKind::InvalidRange { .. }));
}

#[rstest]
#[case("{")]
#[case("{2..")]
#[case("{..3}")]
#[case("++")]
#[case("{2,3}")]
fn rejects_malformed_quantifier(#[case] text: &str) {
    assert!(resolve_quantifier(text).is_err(), "{:?} should not resolve", text);
}

#[test]
fn printed_quantifier_resolves_back() {
    for quantifier in [
        Quantifier::OPTIONAL,
        Quantifier::ZERO_OR_MORE,
        Quantifier::ONE_OR_MORE,
        Quantifier::exactly(7),
        Quantifier::at_least(3),
        Quantifier::between(1, 9).unwrap(),
    ] {
        let text = quantifier.to_string();
        assert_eq!(resolve_quantifier(&text).unwrap(), Some(quantifier), "for {}", text);
    }
}
