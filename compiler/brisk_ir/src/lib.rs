//! Shared data types for the Brisk front end.
//!
//! Everything the tokenizer produces and the parser consumes lives here:
//! [`Token`] records, the closed [`TokenKind`] enumeration, literal payloads,
//! and the EOF-terminated [`TokenList`] with its forward-only
//! [`TokenCursor`].

mod span;
mod token;

pub use span::Span;
pub use token::{
    IllegalKind, Keyword, Token, TokenCursor, TokenFlags, TokenKind, TokenList, TokenValue,
};
