//! The `lex` command: tokenize a file and dump its tokens.

use std::fmt::Write as _;
use std::path::Path;

use brisk_diagnostic::Diagnostic;
use brisk_ir::Token;
use brisk_lexer::{lex, lex_errors};
use tracing::debug;

use super::read_file;
use crate::{DriverError, LexOptions, OutputFormat};

/// Rendered output of one `lex` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    /// One line per token, EOF included.
    pub listing: String,
    /// One rendered diagnostic per illegal token.
    pub diagnostics: Vec<String>,
}

impl LexReport {
    pub fn illegal_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Enforce `--deny-illegal`.
    pub fn check(&self, options: &LexOptions) -> Result<(), DriverError> {
        if options.deny_illegal && self.illegal_count() > 0 {
            return Err(DriverError::IllegalTokens {
                count: self.illegal_count(),
            });
        }
        Ok(())
    }
}

/// Format one token as `KIND [value] [@ line:start-end]`.
pub fn render_token(token: &Token, show_positions: bool) -> String {
    let mut line = String::from(token.kind.name());
    if let Some(value) = &token.value {
        let _ = write!(line, " {value}");
    }
    if show_positions {
        let _ = write!(line, " @ {}:{}-{}", token.line, token.start, token.end);
    }
    line
}

/// Tokenize in-memory source and render the report.
pub fn lex_source(source: &str, options: &LexOptions) -> LexReport {
    let tokens = lex(source);
    let mut listing = String::new();
    for token in &tokens {
        listing.push_str(&render_token(token, options.show_positions));
        listing.push('\n');
    }
    let diagnostics = lex_errors(&tokens)
        .iter()
        .map(|err| match options.format {
            OutputFormat::Default => err.default_format(),
            OutputFormat::Verbose => err.verbose_format(),
        })
        .collect();
    LexReport {
        listing,
        diagnostics,
    }
}

/// Load `path` and tokenize it.
pub fn lex_file(path: &Path, options: &LexOptions) -> Result<LexReport, DriverError> {
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "lexing file");
    Ok(lex_source(&source, options))
}
