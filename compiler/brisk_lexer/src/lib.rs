//! Tokenizer for Brisk.
//!
//! Turns source text into an EOF-terminated [`TokenList`] in one
//! left-to-right pass. Malformed input never aborts the scan: it surfaces as
//! `Illegal` tokens, which [`lex_errors`] turns into diagnostics.
//!
//! ```text
//! &str ──SourceBuffer──▶ Cursor ──Tokenizer::generate──▶ TokenList ──cursor()──▶ parser
//! ```

mod escape;
mod keywords;
mod lex_error;
mod tokenizer;

use brisk_ir::TokenList;
use brisk_lexer_core::SourceBuffer;

pub use lex_error::LexError;
pub use tokenizer::Tokenizer;

/// Tokenize a complete source text.
///
/// This is the constructor-and-run entry point: it copies `source` into a
/// [`SourceBuffer`], builds a [`Tokenizer`] over it and generates the list.
/// Always succeeds; the result ends with exactly one EOF token.
pub fn lex(source: &str) -> TokenList {
    let buffer = SourceBuffer::new(source);
    Tokenizer::new(buffer.cursor()).generate()
}

/// Collect a diagnostic for every illegal token, in source order.
pub fn lex_errors(tokens: &TokenList) -> Vec<LexError> {
    tokens.iter().filter_map(LexError::from_token).collect()
}
