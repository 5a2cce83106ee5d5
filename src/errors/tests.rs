//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { token: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("`)`"),
            found: String::from("end of input"),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_number_parse_error_is_lexical() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: String::from("99999999999999999999"),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_syntax_errors() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("an operand"),
            found: String::from("`*`"),
        },
        Position(0),
    );
    let trailing = Error::new(
        ErrorImpl::TrailingInput {
            found: String::from("number `3`"),
        },
        Position(4),
    );

    assert_eq!(unexpected.kind(), ErrorKind::Syntax);
    assert_eq!(trailing.kind(), ErrorKind::Syntax);
    assert_eq!(trailing.get_error_name(), "TrailingInput");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, Position(8));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { token: '@' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("`)`"),
            found: String::from("end of input"),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `)`, found end of input"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_names_character_and_offset() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { token: '&' }, Position(3));

    assert_eq!(error.to_string(), "unrecognised token: '&' (at byte 3)");
}
