//! The CST preserves every byte of its input.

use rstest::rstest;
use xuml_model::parser::{SyntaxKind, parse};

use crate::helpers::source_fixtures::{DUPLICATE_METADATA, ELEVATOR_TRANSPORT, HEADER};

#[rstest]
#[case(ELEVATOR_TRANSPORT)]
#[case(DUPLICATE_METADATA)]
#[case(HEADER)]
#[case("")]
#[case("domain D\nsubsystem S\n???\nclass\n")]
#[case("domain D\r\nsubsystem S, SS\r\n")]
fn test_round_trip(#[case] input: &str) {
    let parse = parse(input);
    assert_eq!(parse.syntax().text().to_string(), input);
    assert_eq!(parse.syntax().kind(), SyntaxKind::SUBSYSTEM);
}

#[test]
fn test_fixture_has_no_errors() {
    let parse = parse(ELEVATOR_TRANSPORT);
    assert!(parse.ok(), "{:?}", parse.errors);

    let classes = parse
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::CLASS_BLOCK)
        .count();
    assert_eq!(classes, 8);
}
