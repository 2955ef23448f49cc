//! Diagnostics for illegal tokens.
//!
//! The tokenizer never fails: it records malformed input as
//! [`TokenKind::Illegal`] tokens carrying an [`IllegalKind`]. A [`LexError`]
//! lifts one of those tokens into a reportable error with a stable
//! [`ErrorCode`] and a fix hint.

use brisk_diagnostic::{Diagnostic, ErrorCode};
use brisk_ir::{IllegalKind, Span, Token, TokenKind, TokenValue};

/// A lexer error located in the source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{start}: {kind}")]
pub struct LexError {
    pub kind: IllegalKind,
    pub line: u32,
    pub start: u32,
    pub end: u32,
    pub span: Span,
}

impl LexError {
    /// Build an error from an illegal token.
    ///
    /// Returns `None` for every other kind of token.
    pub fn from_token(token: &Token) -> Option<LexError> {
        if token.kind != TokenKind::Illegal {
            return None;
        }
        let Some(&TokenValue::Illegal(kind)) = token.value.as_ref() else {
            return None;
        };
        Some(LexError {
            kind,
            line: token.line,
            start: token.start,
            end: token.end,
            span: token.span,
        })
    }

    /// Actionable suggestion for fixing the error.
    pub fn hint(&self) -> &'static str {
        match self.kind {
            IllegalKind::UnknownChar(_) => "remove this character",
            IllegalKind::LonePipe => "use `||` for logical or",
            IllegalKind::InteriorNull => "remove the null byte",
            IllegalKind::UnterminatedString => "add a closing `\"` before the end of the line",
            IllegalKind::UnterminatedChar => "add a closing `'`",
            IllegalKind::EmptyChar => "a character literal must hold exactly one character",
            IllegalKind::MultiCharLiteral => "use double quotes for a string literal",
            IllegalKind::InvalidEscape(_) => {
                "valid escapes are \\n, \\r, \\t, \\0, \\\\, \\\" and \\'"
            }
            IllegalKind::IntOverflow => "integer literals must fit in a signed 64-bit value",
        }
    }
}

/// Error code for each illegal-token reason.
fn code_for(kind: IllegalKind) -> ErrorCode {
    match kind {
        IllegalKind::UnterminatedString => ErrorCode::E0001,
        IllegalKind::UnknownChar(_) | IllegalKind::LonePipe | IllegalKind::InteriorNull => {
            ErrorCode::E0002
        }
        IllegalKind::IntOverflow => ErrorCode::E0003,
        IllegalKind::UnterminatedChar => ErrorCode::E0004,
        IllegalKind::InvalidEscape(_) => ErrorCode::E0005,
        IllegalKind::EmptyChar | IllegalKind::MultiCharLiteral => ErrorCode::E0006,
    }
}

impl Diagnostic for LexError {
    fn code(&self) -> ErrorCode {
        code_for(self.kind)
    }

    fn default_format(&self) -> String {
        self.to_string()
    }

    fn verbose_format(&self) -> String {
        let columns = if self.start == self.end {
            format!("column {}", self.start)
        } else {
            format!("columns {}-{}", self.start, self.end)
        };
        format!(
            "error[{code}]: {kind}\n --> line {line}, {columns}\n  = help: {hint}",
            code = self.code(),
            kind = self.kind,
            line = self.line,
            hint = self.hint(),
        )
    }
}
