//! Token kinds for Brisk.

use std::fmt;

/// Lexical category of a token.
///
/// The set is closed: every token the tokenizer emits has exactly one of
/// these kinds. Discriminants are grouped in ranges with gaps for future
/// growth:
///
/// | Range | Category                      |
/// |-------|-------------------------------|
/// | 0-3   | Structural                    |
/// | 8-12  | Literals                      |
/// | 16-36 | Single-character punctuation  |
/// | 48-59 | Compound (two-character) ops  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Structural (0-3) ===
    Eof = 0,
    Ident = 1,
    Keyword = 2,
    Illegal = 3,

    // === Literals (8-12) ===
    Int = 8,
    Float = 9,
    String = 10,
    Char = 11,
    Bool = 12,

    // === Single-character (16-36) ===
    Exclam = 16,   // !
    Mod = 17,      // %
    Pow = 18,      // ^
    Amp = 19,      // &
    Ast = 20,      // *
    LParen = 21,   // (
    RParen = 22,   // )
    Minus = 23,    // -
    Plus = 24,     // +
    Assign = 25,   // =
    Colon = 26,    // :
    Semicol = 27,  // ;
    Comma = 28,    // ,
    Dot = 29,      // .
    Div = 30,      // /
    LBrace = 31,   // {
    RBrace = 32,   // }
    LBracket = 33, // [
    RBracket = 34, // ]
    Gt = 35,       // >
    Lt = 36,       // <

    // === Compound (48-59) ===
    Neq = 48,        // !=
    And = 49,        // &&
    AstEq = 50,      // *=
    DivEq = 51,      // /=
    MinusMinus = 52, // --
    MinusEq = 53,    // -=
    PlusPlus = 54,   // ++
    PlusEq = 55,     // +=
    Eq = 56,         // ==
    GtEq = 57,       // >=
    LtEq = 58,       // <=
    Or = 59,         // ||
}

impl TokenKind {
    /// Every compound operator, in table order.
    pub const COMPOUNDS: [TokenKind; 12] = [
        TokenKind::Neq,
        TokenKind::And,
        TokenKind::AstEq,
        TokenKind::DivEq,
        TokenKind::MinusMinus,
        TokenKind::MinusEq,
        TokenKind::PlusPlus,
        TokenKind::PlusEq,
        TokenKind::Eq,
        TokenKind::GtEq,
        TokenKind::LtEq,
        TokenKind::Or,
    ];

    /// Every single-character punctuation or operator kind, in table order.
    pub const SINGLES: [TokenKind; 21] = [
        TokenKind::Exclam,
        TokenKind::Mod,
        TokenKind::Pow,
        TokenKind::Amp,
        TokenKind::Ast,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Assign,
        TokenKind::Colon,
        TokenKind::Semicol,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Div,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Gt,
        TokenKind::Lt,
    ];

    /// Fixed source text for punctuation and operator kinds.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals,
    /// illegal tokens) and for EOF.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Exclam => "!",
            TokenKind::Mod => "%",
            TokenKind::Pow => "^",
            TokenKind::Amp => "&",
            TokenKind::Ast => "*",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Assign => "=",
            TokenKind::Colon => ":",
            TokenKind::Semicol => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Div => "/",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Neq => "!=",
            TokenKind::And => "&&",
            TokenKind::AstEq => "*=",
            TokenKind::DivEq => "/=",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEq => "-=",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEq => "+=",
            TokenKind::Eq => "==",
            TokenKind::GtEq => ">=",
            TokenKind::LtEq => "<=",
            TokenKind::Or => "||",
            TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Keyword
            | TokenKind::Illegal
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::Bool => return None,
        })
    }

    /// Human-readable name, used in token dumps and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Bool => "BOOL",
            TokenKind::Exclam => "EXCLAM",
            TokenKind::Mod => "MOD",
            TokenKind::Pow => "POW",
            TokenKind::Amp => "AMP",
            TokenKind::Ast => "AST",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicol => "SEMICOL",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Div => "DIV",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Neq => "NEQ",
            TokenKind::And => "AND",
            TokenKind::AstEq => "ASTEQ",
            TokenKind::DivEq => "DIVEQ",
            TokenKind::MinusMinus => "MINUSMINUS",
            TokenKind::MinusEq => "MINUSEQ",
            TokenKind::PlusPlus => "PLUSPLUS",
            TokenKind::PlusEq => "PLUSEQ",
            TokenKind::Eq => "EQ",
            TokenKind::GtEq => "GTEQ",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Or => "OR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.name()),
        }
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
