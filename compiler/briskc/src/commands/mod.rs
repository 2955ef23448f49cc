//! Command handlers for the `brisk` CLI.

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source, render_token, LexReport};

use std::path::Path;

use crate::DriverError;

/// Read a source file, mapping I/O failures to [`DriverError::Read`].
///
/// Invalid UTF-8 is not an I/O failure: each bad sequence becomes
/// `U+FFFD`, which the tokenizer reports as an illegal character.
pub(crate) fn read_file(path: &Path) -> Result<String, DriverError> {
    let bytes = std::fs::read(path).map_err(|e| DriverError::read(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
