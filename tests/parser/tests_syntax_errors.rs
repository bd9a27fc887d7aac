//! Syntax errors carry messages and positions.

use rstest::rstest;
use xuml_model::parser::parse;
use xuml_model::{CompileError, compile_str};

#[rstest]
#[case("subsystem S\n", "expected `domain` line", 0, 0)]
#[case("domain D\nsubsystem S, abc\n", "expected subsystem abbreviation in capitals", 1, 13)]
#[case("domain D\nsubsystem S\nclass A\nattributes\nX {UR3c}\n--\n", "constrained marker needs a navigation target", 4, 3)]
#[case("domain D\nsubsystem S\nclass A\nattributes\nX : Y {Q1}\n--\n", "expected identifier or relationship tag, found `Q1`", 4, 7)]
#[case("domain D\nsubsystem S\nrelationships\nR1\nowns 1 Pet\nis owned by, M Owner\n", "expected `,` after the phrase", 4, 10)]
#[case("domain D\nsubsystem S\nclass A, B\nattributes\nX : Y\nmethods\nrun()\n", "expected `--` to close the class", 7, 0)]
fn test_first_error(
    #[case] input: &str,
    #[case] message: &str,
    #[case] line: u32,
    #[case] col: u32,
) {
    let parse = parse(input);
    let first = parse.errors.first().expect("input should not parse");
    assert_eq!(first.message, message);
    assert_eq!((first.span.start.line, first.span.start.col), (line, col));
}

#[test]
fn test_recovery_reports_each_bad_line() {
    let parse = parse("domain D\nsubsystem S\n??\n!!\n");
    assert_eq!(parse.errors.len(), 2);
    assert_eq!(parse.errors[0].span.start.line, 2);
    assert_eq!(parse.errors[1].span.start.line, 3);
}

#[test]
fn test_compile_reports_syntax_errors() {
    let err = compile_str("domain D\nsubsystem S, abc\n").unwrap_err();
    let CompileError::Syntax(errors) = &err else {
        panic!("expected syntax errors, got {err}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(
        err.to_string(),
        "1 syntax error(s):\n  2:14: expected subsystem abbreviation in capitals"
    );
}
