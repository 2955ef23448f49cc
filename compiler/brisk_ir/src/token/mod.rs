//! Token types for the Brisk tokenizer.

mod cursor;
mod flags;
mod kind;
mod list;
mod value;

pub use cursor::TokenCursor;
pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;
pub use value::{IllegalKind, Keyword, TokenValue};

use std::fmt;

use super::Span;

/// A classified lexeme with its position in the source.
///
/// `line`, `start` and `end` are 1-based; `start` and `end` are inclusive
/// columns of the first and last character. `span` is the byte range.
/// Tokens are handed out by shared reference only and never change after
/// the tokenizer builds them.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub line: u32,
    pub start: u32,
    pub end: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: Option<TokenValue>, line: u32, start: u32, end: u32) -> Self {
        Token {
            kind,
            value,
            line,
            start,
            end,
            span: Span::DUMMY,
        }
    }

    /// Attach the byte range this token was scanned from.
    #[inline]
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.name())?;
        if let Some(value) = &self.value {
            write!(f, "({value})")?;
        }
        write!(f, " @ {}:{}-{}", self.line, self.start, self.end)
    }
}
