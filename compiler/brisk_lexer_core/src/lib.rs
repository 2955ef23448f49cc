//! Low-level scanning primitives for the Brisk tokenizer.
//!
//! This crate owns the byte plumbing only: a sentinel-terminated copy of the
//! source ([`SourceBuffer`]) and a cheap, copyable [`Cursor`] over it. Token
//! classification lives in `brisk_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
