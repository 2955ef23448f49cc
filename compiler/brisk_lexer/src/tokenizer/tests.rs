use brisk_ir::{IllegalKind, Keyword, Span, TokenFlags, TokenKind, TokenValue};
use brisk_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use crate::{lex, lex_errors, Tokenizer};

type Summary = (TokenKind, Option<TokenValue>, u32, u32, u32);

/// `(kind, value, line, start, end)` for every token, EOF included.
fn summary(source: &str) -> Vec<Summary> {
    lex(source)
        .iter()
        .map(|t| (t.kind, t.value.clone(), t.line, t.start, t.end))
        .collect()
}

/// Kinds without the trailing EOF.
fn kinds(source: &str) -> Vec<TokenKind> {
    let mut kinds = lex(source).kinds();
    assert_eq!(kinds.pop(), Some(TokenKind::Eof));
    kinds
}

fn illegal(kind: IllegalKind) -> Option<TokenValue> {
    Some(TokenValue::Illegal(kind))
}

// === Scenarios ===

#[test]
fn double_equals_is_one_token() {
    assert_eq!(
        summary("=="),
        vec![(TokenKind::Eq, None, 1, 1, 2), (TokenKind::Eof, None, 1, 3, 3)]
    );
}

#[test]
fn single_equals_is_assign() {
    assert_eq!(
        summary("="),
        vec![(TokenKind::Assign, None, 1, 1, 1), (TokenKind::Eof, None, 1, 2, 2)]
    );
}

#[test]
fn assignment_statement() {
    assert_eq!(
        summary("a = 1;\n"),
        vec![
            (TokenKind::Ident, Some(TokenValue::Ident("a".into())), 1, 1, 1),
            (TokenKind::Assign, None, 1, 3, 3),
            (TokenKind::Int, Some(TokenValue::Int(1)), 1, 5, 5),
            (TokenKind::Semicol, None, 1, 6, 6),
            (TokenKind::Eof, None, 2, 1, 1),
        ]
    );
}

#[test]
fn exclam_and_neq() {
    assert_eq!(kinds("!"), vec![TokenKind::Exclam]);
    assert_eq!(
        summary("!="),
        vec![(TokenKind::Neq, None, 1, 1, 2), (TokenKind::Eof, None, 1, 3, 3)]
    );
}

#[test]
fn lone_pipe_is_illegal() {
    assert_eq!(
        summary("|"),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::LonePipe), 1, 1, 1),
            (TokenKind::Eof, None, 1, 2, 2),
        ]
    );
}

#[test]
fn pipes() {
    assert_eq!(kinds("||"), vec![TokenKind::Or]);
    assert_eq!(kinds("|||"), vec![TokenKind::Or, TokenKind::Illegal]);
    assert_eq!(kinds("| |"), vec![TokenKind::Illegal, TokenKind::Illegal]);
}

#[test]
fn empty_input_is_just_eof() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(summary(""), vec![(TokenKind::Eof, None, 1, 1, 1)]);
    assert_eq!(tokens.eof().span, Span::point(0));
}

#[test]
fn whitespace_only_input() {
    assert_eq!(summary(" \t\r\n\n  "), vec![(TokenKind::Eof, None, 3, 3, 3)]);
}

#[test]
fn lex_matches_a_tokenizer_over_the_same_buffer() {
    let source = "let s = \"x\" != 'y';\n";
    let buffer = SourceBuffer::new(source);
    let direct = Tokenizer::new(buffer.cursor()).generate();
    assert_eq!(direct, lex(source));
}

// === Operators ===

#[test]
fn every_compound_matches_greedily() {
    for kind in TokenKind::COMPOUNDS {
        let text = kind.lexeme().unwrap_or_default();
        assert_eq!(kinds(text), vec![kind], "{text}");
    }
}

#[test]
fn every_single_stands_alone() {
    for kind in TokenKind::SINGLES {
        let text = kind.lexeme().unwrap_or_default();
        assert_eq!(kinds(text), vec![kind], "{text}");
    }
}

#[test]
fn fallback_reexamines_next_char() {
    assert_eq!(kinds("=!"), vec![TokenKind::Assign, TokenKind::Exclam]);
    assert_eq!(kinds("!=="), vec![TokenKind::Neq, TokenKind::Assign]);
    assert_eq!(kinds("---"), vec![TokenKind::MinusMinus, TokenKind::Minus]);
    assert_eq!(kinds("-+="), vec![TokenKind::Minus, TokenKind::PlusEq]);
    assert_eq!(kinds("<>"), vec![TokenKind::Lt, TokenKind::Gt]);
    assert_eq!(kinds("&&&"), vec![TokenKind::And, TokenKind::Amp]);
    assert_eq!(kinds("*/="), vec![TokenKind::Ast, TokenKind::DivEq]);
}

#[test]
fn prefix_at_end_of_input() {
    assert_eq!(kinds("a+"), vec![TokenKind::Ident, TokenKind::Plus]);
    assert_eq!(kinds("x<"), vec![TokenKind::Ident, TokenKind::Lt]);
}

#[test]
fn whitespace_advances_columns() {
    assert_eq!(
        summary("\t=\r\n  ="),
        vec![
            (TokenKind::Assign, None, 1, 2, 2),
            (TokenKind::Assign, None, 2, 3, 3),
            (TokenKind::Eof, None, 2, 4, 4),
        ]
    );
}

// === Identifiers and keywords ===

#[test]
fn keywords_idents_and_bools() {
    assert_eq!(
        summary("let x_1 = true;"),
        vec![
            (TokenKind::Keyword, Some(TokenValue::Keyword(Keyword::Let)), 1, 1, 3),
            (TokenKind::Ident, Some(TokenValue::Ident("x_1".into())), 1, 5, 7),
            (TokenKind::Assign, None, 1, 9, 9),
            (TokenKind::Bool, Some(TokenValue::Bool(true)), 1, 11, 14),
            (TokenKind::Semicol, None, 1, 15, 15),
            (TokenKind::Eof, None, 1, 16, 16),
        ]
    );
}

#[test]
fn identifier_stops_at_punctuation() {
    assert_eq!(
        kinds("fn main(){}"),
        vec![
            TokenKind::Keyword,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(
        summary("iffy"),
        vec![
            (TokenKind::Ident, Some(TokenValue::Ident("iffy".into())), 1, 1, 4),
            (TokenKind::Eof, None, 1, 5, 5),
        ]
    );
}

// === Numbers ===

#[test]
fn integers_and_floats() {
    assert_eq!(
        summary("42 2.75 1. 007"),
        vec![
            (TokenKind::Int, Some(TokenValue::Int(42)), 1, 1, 2),
            (TokenKind::Float, Some(TokenValue::Float(2.75)), 1, 4, 7),
            (TokenKind::Int, Some(TokenValue::Int(1)), 1, 9, 9),
            (TokenKind::Dot, None, 1, 10, 10),
            (TokenKind::Int, Some(TokenValue::Int(7)), 1, 12, 14),
            (TokenKind::Eof, None, 1, 15, 15),
        ]
    );
}

#[test]
fn member_access_on_integer() {
    assert_eq!(
        kinds("1.x"),
        vec![TokenKind::Int, TokenKind::Dot, TokenKind::Ident]
    );
}

#[test]
fn oversized_float_is_infinite_not_illegal() {
    let source = format!("{}.5", "9".repeat(400));
    let tokens = lex(&source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].value, Some(TokenValue::Float(f64::INFINITY)));
    assert_eq!((tokens[0].start, tokens[0].end), (1, 402));
    assert_eq!(lex_errors(&tokens), vec![]);
}

#[test]
fn integer_bounds() {
    assert_eq!(
        summary("9223372036854775807"),
        vec![
            (TokenKind::Int, Some(TokenValue::Int(i64::MAX)), 1, 1, 19),
            (TokenKind::Eof, None, 1, 20, 20),
        ]
    );
    assert_eq!(
        summary("9223372036854775808"),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::IntOverflow), 1, 1, 19),
            (TokenKind::Eof, None, 1, 20, 20),
        ]
    );
}

// === Strings ===

#[test]
fn string_with_escapes() {
    assert_eq!(
        summary(r#""hi\n\"x\"" ;"#),
        vec![
            (TokenKind::String, Some(TokenValue::Str("hi\n\"x\"".into())), 1, 1, 11),
            (TokenKind::Semicol, None, 1, 13, 13),
            (TokenKind::Eof, None, 1, 14, 14),
        ]
    );
}

#[test]
fn string_counts_characters_not_bytes() {
    let tokens = lex("\"héllo\"=");
    assert_eq!(tokens[0].value, Some(TokenValue::Str("héllo".into())));
    assert_eq!((tokens[0].start, tokens[0].end), (1, 7));
    assert_eq!(tokens[0].span, Span::new(0, 8));
    assert_eq!((tokens[1].kind, tokens[1].start), (TokenKind::Assign, 8));
}

#[test]
fn unterminated_string_stops_at_newline() {
    let tokens = lex("\"abc\nx");
    assert_eq!(
        summary("\"abc\nx"),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::UnterminatedString), 1, 1, 4),
            (TokenKind::Ident, Some(TokenValue::Ident("x".into())), 2, 1, 1),
            (TokenKind::Eof, None, 2, 2, 2),
        ]
    );
    assert_eq!(tokens[0].span, Span::new(0, 4));
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(
        summary("\"ab"),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::UnterminatedString), 1, 1, 3),
            (TokenKind::Eof, None, 1, 4, 4),
        ]
    );
    assert_eq!(kinds("\"ab\\"), vec![TokenKind::Illegal]);
}

#[test]
fn invalid_escape_covers_whole_literal() {
    assert_eq!(
        summary(r#""a\qb" x"#),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::InvalidEscape('q')), 1, 1, 6),
            (TokenKind::Ident, Some(TokenValue::Ident("x".into())), 1, 8, 8),
            (TokenKind::Eof, None, 1, 9, 9),
        ]
    );
}

// === Characters ===

#[test]
fn char_literals() {
    assert_eq!(
        summary(r"'a' '\n' '' 'ab' 'x"),
        vec![
            (TokenKind::Char, Some(TokenValue::Char('a')), 1, 1, 3),
            (TokenKind::Char, Some(TokenValue::Char('\n')), 1, 5, 8),
            (TokenKind::Illegal, illegal(IllegalKind::EmptyChar), 1, 10, 11),
            (TokenKind::Illegal, illegal(IllegalKind::MultiCharLiteral), 1, 13, 16),
            (TokenKind::Illegal, illegal(IllegalKind::UnterminatedChar), 1, 18, 19),
            (TokenKind::Eof, None, 1, 20, 20),
        ]
    );
}

#[test]
fn char_literal_escaped_quote() {
    assert_eq!(
        lex(r"'\''")[0].value,
        Some(TokenValue::Char('\''))
    );
}

// === Illegal bytes ===

#[test]
fn unknown_ascii_characters() {
    assert_eq!(
        summary("#@"),
        vec![
            (TokenKind::Illegal, illegal(IllegalKind::UnknownChar('#')), 1, 1, 1),
            (TokenKind::Illegal, illegal(IllegalKind::UnknownChar('@')), 1, 2, 2),
            (TokenKind::Eof, None, 1, 3, 3),
        ]
    );
}

#[test]
fn non_ascii_character_is_one_column() {
    let tokens = lex("é=");
    assert_eq!(tokens[0].value, illegal(IllegalKind::UnknownChar('é')));
    assert_eq!((tokens[0].start, tokens[0].end), (1, 1));
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!((tokens[1].kind, tokens[1].start), (TokenKind::Assign, 2));
    assert_eq!(tokens[1].span, Span::new(2, 3));
}

#[test]
fn interior_null() {
    assert_eq!(
        summary("a\0b"),
        vec![
            (TokenKind::Ident, Some(TokenValue::Ident("a".into())), 1, 1, 1),
            (TokenKind::Illegal, illegal(IllegalKind::InteriorNull), 1, 2, 2),
            (TokenKind::Ident, Some(TokenValue::Ident("b".into())), 1, 3, 3),
            (TokenKind::Eof, None, 1, 4, 4),
        ]
    );
}

// === Flags ===

#[test]
fn trivia_flags() {
    let tokens = lex("a =b\n c");
    assert_eq!(
        tokens.flags(),
        &[
            TokenFlags::LINE_START,
            TokenFlags::SPACE_BEFORE,
            TokenFlags::ADJACENT,
            TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START | TokenFlags::SPACE_BEFORE,
            TokenFlags::ADJACENT,
        ]
    );
}

#[test]
fn eof_after_newline_starts_a_line() {
    let tokens = lex("x\n");
    assert_eq!(
        tokens.flag(1),
        TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START
    );
}
