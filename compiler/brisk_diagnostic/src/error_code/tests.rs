use super::*;

#[test]
fn codes_round_trip_through_parse() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(ErrorCode::parse("e0002"), Some(ErrorCode::E0002));
}

#[test]
fn parse_rejects_unknown() {
    assert_eq!(ErrorCode::parse("E9999"), None);
    assert_eq!(ErrorCode::parse(""), None);
}

#[test]
fn codes_are_lexer_phase() {
    for code in ErrorCode::ALL {
        assert!(code.as_str().starts_with("E0"), "{code}");
        assert!(!code.description().is_empty());
    }
}
