//! Literal payloads carried by tokens.

use std::fmt;

/// Payload attached to identifier, keyword, literal and illegal tokens.
///
/// Punctuation, operators and EOF carry no value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    /// String literal contents with escapes already resolved.
    Str(String),
    Char(char),
    Bool(bool),
    Ident(String),
    Keyword(Keyword),
    /// Why the lexeme was rejected.
    Illegal(IllegalKind),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(v) => write!(f, "{v}"),
            TokenValue::Float(v) => write!(f, "{v:?}"),
            TokenValue::Str(s) => write!(f, "{s:?}"),
            TokenValue::Char(c) => write!(f, "{c:?}"),
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Ident(name) => f.write_str(name),
            TokenValue::Keyword(kw) => f.write_str(kw.as_str()),
            TokenValue::Illegal(kind) => write!(f, "{kind}"),
        }
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Const,
    Continue,
    Else,
    Fn,
    For,
    If,
    In,
    Let,
    Return,
    Struct,
    While,
}

impl Keyword {
    pub const ALL: [Keyword; 12] = [
        Keyword::Break,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Else,
        Keyword::Fn,
        Keyword::For,
        Keyword::If,
        Keyword::In,
        Keyword::Let,
        Keyword::Return,
        Keyword::Struct,
        Keyword::While,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Else => "else",
            Keyword::Fn => "fn",
            Keyword::For => "for",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Let => "let",
            Keyword::Return => "return",
            Keyword::Struct => "struct",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a lexeme was classified [`TokenKind::Illegal`](super::TokenKind::Illegal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalKind {
    /// Character with no lexical rule (e.g. `#`, `@`, any non-ASCII char).
    UnknownChar(char),
    /// `|` not followed by a second `|`.
    LonePipe,
    /// NUL byte inside the source.
    InteriorNull,
    /// `"` with no closing quote before the end of the line.
    UnterminatedString,
    /// `'` with no closing quote before the end of the line.
    UnterminatedChar,
    /// `''`.
    EmptyChar,
    /// More than one character between single quotes.
    MultiCharLiteral,
    /// Unknown escape sequence, e.g. `\q`.
    InvalidEscape(char),
    /// Integer literal does not fit in `i64`.
    IntOverflow,
}

impl fmt::Display for IllegalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalKind::UnknownChar(c) => write!(f, "illegal character {c:?}"),
            IllegalKind::LonePipe => f.write_str("`|` must be followed by `|`"),
            IllegalKind::InteriorNull => f.write_str("null byte in source"),
            IllegalKind::UnterminatedString => f.write_str("unterminated string literal"),
            IllegalKind::UnterminatedChar => f.write_str("unterminated character literal"),
            IllegalKind::EmptyChar => f.write_str("empty character literal"),
            IllegalKind::MultiCharLiteral => {
                f.write_str("character literal holds more than one character")
            }
            IllegalKind::InvalidEscape(c) => write!(f, "unknown escape sequence `\\{c}`"),
            IllegalKind::IntOverflow => f.write_str("integer literal is too large"),
        }
    }
}
