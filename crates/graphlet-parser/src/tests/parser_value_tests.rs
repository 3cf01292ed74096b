//! Tests for value parsing.
//!
//! Each test navigates to a parsed argument value and pattern matches
//! to verify the correct variant and content.

use crate::ast::Value;
use crate::tests::utils::arg_value;
use crate::tests::utils::first_selection;
use crate::tests::utils::parse;
use crate::tests::utils::parse_err;
use crate::ParseErrorKind;
use crate::ValueParsingError;

fn parse_arg(source: &str) -> Value {
    let document = parse(source);
    arg_value(first_selection(&document), "arg").clone()
}

// =============================================================================
// Numbers
// =============================================================================

/// `age: 30` parses to `Int(30)`: no `.` means integer.
#[test]
fn int_value() {
    assert_eq!(parse_arg("query { f(arg: 30) }"), Value::Int(30));
}

#[test]
fn negative_int_value() {
    assert_eq!(parse_arg("query { f(arg: -456) }"), Value::Int(-456));
}

/// `score: 30.5` parses to `Float(30.5)`: the `.` alone selects Float.
#[test]
fn float_value() {
    assert_eq!(parse_arg("query { f(arg: 30.5) }"), Value::Float(30.5));
}

#[test]
fn negative_float_value() {
    assert_eq!(parse_arg("query { f(arg: -0.25) }"), Value::Float(-0.25));
}

/// Exponent notation is not supported: `1e10` has no `.`, is parsed as
/// an integer literal, and fails rather than being silently truncated.
#[test]
fn exponent_notation_is_rejected() {
    let error = parse_err("query { f(arg: 1e10) }");
    assert_eq!(
        error.kind,
        ParseErrorKind::InvalidValue(ValueParsingError::Int(
            "1e10".to_string(),
        )),
    );
}

#[test]
fn bare_minus_sign_is_rejected() {
    let error = parse_err("query { f(arg: -) }");
    assert!(matches!(
        error.kind,
        ParseErrorKind::InvalidValue(ValueParsingError::Int(_)),
    ));
}

#[test]
fn doubled_decimal_point_is_rejected() {
    let error = parse_err("query { f(arg: 1.2.3) }");
    assert!(matches!(
        error.kind,
        ParseErrorKind::InvalidValue(ValueParsingError::Float(_)),
    ));
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_value() {
    assert_eq!(
        parse_arg("query { f(arg: \"hello\") }"),
        Value::String("hello".to_string()),
    );
}

#[test]
fn empty_string_value() {
    assert_eq!(
        parse_arg("query { f(arg: \"\") }"),
        Value::String(String::new()),
    );
}

/// String contents are taken verbatim between the quotes: backslashes
/// are not escape sequences in this grammar.
#[test]
fn string_value_has_no_escape_processing() {
    assert_eq!(
        parse_arg(r#"query { f(arg: "a\nb") }"#),
        Value::String("a\\nb".to_string()),
    );
}

#[test]
fn unterminated_string_value() {
    let error = parse_err("query { f(arg: \"oops) }");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEndOfInput);
}

// =============================================================================
// Booleans and null
// =============================================================================

#[test]
fn boolean_values() {
    assert_eq!(parse_arg("query { f(arg: true) }"), Value::Bool(true));
    assert_eq!(parse_arg("query { f(arg: false) }"), Value::Bool(false));
}

#[test]
fn null_value() {
    assert_eq!(parse_arg("query { f(arg: null) }"), Value::Null);
}

#[test]
fn misspelled_keyword_value() {
    let error = parse_err("query { f(arg: tru) }");
    assert_eq!(
        error.kind,
        ParseErrorKind::UnexpectedWord {
            expected: "true".to_string(),
        },
    );
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn empty_list_value() {
    assert_eq!(parse_arg("query { f(arg: []) }"), Value::List(vec![]));
}

#[test]
fn list_value_with_trailing_comma() {
    assert_eq!(
        parse_arg("query { f(arg: [1, 2,]) }"),
        Value::List(vec![Value::Int(1), Value::Int(2)]),
    );
}

#[test]
fn nested_list_value() {
    assert_eq!(
        parse_arg("query { f(arg: [[1], []]) }"),
        Value::List(vec![
            Value::List(vec![Value::Int(1)]),
            Value::List(vec![]),
        ]),
    );
}

#[test]
fn object_value() {
    assert_eq!(
        parse_arg("query { f(arg: { active: true, limit: 10 }) }"),
        Value::Object(indexmap::indexmap! {
            "active".to_string() => Value::Bool(true),
            "limit".to_string() => Value::Int(10),
        }),
    );
}

/// Duplicate object keys overwrite: last write wins, no error.
#[test]
fn duplicate_object_keys_last_write_wins() {
    assert_eq!(
        parse_arg("query { f(arg: { a: 1, a: 2 }) }"),
        Value::Object(indexmap::indexmap! {
            "a".to_string() => Value::Int(2),
        }),
    );
}

#[test]
fn heterogeneous_list_value() {
    assert_eq!(
        parse_arg("query { f(arg: [1, \"two\", null, true]) }"),
        Value::List(vec![
            Value::Int(1),
            Value::String("two".to_string()),
            Value::Null,
            Value::Bool(true),
        ]),
    );
}

// =============================================================================
// Dispatch failures
// =============================================================================

/// A value's first byte must select one of the value rules.
#[test]
fn unrecognized_value_start_byte() {
    let error = parse_err("query { f(arg: @skip) }");
    assert_eq!(
        error.kind,
        ParseErrorKind::InvalidValue(ValueParsingError::UnrecognizedStart('@')),
    );
}

/// Bare enum-style symbols are not parseable values in this subset;
/// `Value::Symbol` exists for builder-supplied arguments only.
#[test]
fn bare_symbol_is_not_a_parseable_value() {
    let error = parse_err("query { f(arg: ACTIVE) }");
    assert_eq!(
        error.kind,
        ParseErrorKind::InvalidValue(ValueParsingError::UnrecognizedStart('A')),
    );
}

/// Deep list nesting trips the shared recursion-depth guard.
#[test]
fn deep_list_nesting_is_rejected() {
    let source = format!("query {{ f(arg: {}1{}) }}", "[".repeat(80), "]".repeat(80));
    let error = parse_err(&source);
    assert!(matches!(
        error.kind,
        ParseErrorKind::RecursionDepthExceeded { .. },
    ));
}
