//! The tokenizer engine.
//!
//! One left-to-right pass over a sentinel-terminated buffer. Each iteration
//! dispatches on the current byte, consumes at least one character, and
//! either records trivia (whitespace, newlines) or emits exactly one token.
//! Ambiguous operator prefixes are resolved with a single byte of lookahead;
//! the sentinel makes that lookahead safe at the last character.

mod literals;

use brisk_ir::{IllegalKind, Span, Token, TokenFlags, TokenKind, TokenList, TokenValue};
use brisk_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::keywords::{self, Word};

/// Source position captured at the first character of a token.
#[derive(Clone, Copy, Debug)]
struct Mark {
    pos: u32,
    column: u32,
}

/// Converts source bytes into an EOF-terminated [`TokenList`].
///
/// Consumed by [`generate`](Self::generate), so a tokenizer runs at most
/// once. It borrows its input through a [`Cursor`]; to tokenize a plain
/// `&str`, use [`lex`](crate::lex), which owns the buffer for the run.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// 1-based line of the cursor.
    line: u32,
    /// 1-based column of the cursor, counted in characters.
    column: u32,
    tokens: Vec<Token>,
    flags: Vec<TokenFlags>,
    /// Trivia seen since the last emitted token.
    pending: TokenFlags,
}

impl<'a> Tokenizer<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        // Rough guess: one token per four bytes.
        let capacity = cursor.source_len() as usize / 4 + 1;
        Tokenizer {
            cursor,
            line: 1,
            column: 1,
            tokens: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
            pending: TokenFlags::LINE_START,
        }
    }

    /// Scan the whole input.
    ///
    /// Never fails: malformed input becomes [`TokenKind::Illegal`] tokens and
    /// scanning resumes after them. The result always ends with exactly one
    /// EOF token.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn generate(mut self) -> TokenList {
        while !self.cursor.is_eof() {
            let before = self.cursor.pos();
            self.next_token();
            debug_assert!(
                self.cursor.pos() > before,
                "tokenizer stalled at byte {before}"
            );
        }

        let eof = Token::new(TokenKind::Eof, None, self.line, self.column, self.column)
            .with_span(Span::point(self.cursor.pos()));
        let flags = self.take_flags();
        self.tokens.push(eof);
        self.flags.push(flags);

        debug!(
            tokens = self.tokens.len(),
            illegal = self
                .tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Illegal)
                .count(),
            lines = self.line,
            "tokenized"
        );
        TokenList::from_parts(self.tokens, self.flags)
    }

    /// Dispatch on the current byte. Every byte value has an arm.
    fn next_token(&mut self) {
        let start = self.mark();
        match self.cursor.current() {
            b' ' | b'\t' | b'\r' => {
                self.bump();
                self.pending |= TokenFlags::SPACE_BEFORE;
            }
            b'\n' => {
                self.bump();
                self.pending |= TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START;
            }

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),

            b'!' => self.prefixed(start, TokenKind::Exclam, &[(b'=', TokenKind::Neq)]),
            b'&' => self.prefixed(start, TokenKind::Amp, &[(b'&', TokenKind::And)]),
            b'*' => self.prefixed(start, TokenKind::Ast, &[(b'=', TokenKind::AstEq)]),
            b'/' => self.prefixed(start, TokenKind::Div, &[(b'=', TokenKind::DivEq)]),
            b'-' => self.prefixed(
                start,
                TokenKind::Minus,
                &[(b'-', TokenKind::MinusMinus), (b'=', TokenKind::MinusEq)],
            ),
            b'+' => self.prefixed(
                start,
                TokenKind::Plus,
                &[(b'+', TokenKind::PlusPlus), (b'=', TokenKind::PlusEq)],
            ),
            b'=' => self.prefixed(start, TokenKind::Assign, &[(b'=', TokenKind::Eq)]),
            b'>' => self.prefixed(start, TokenKind::Gt, &[(b'=', TokenKind::GtEq)]),
            b'<' => self.prefixed(start, TokenKind::Lt, &[(b'=', TokenKind::LtEq)]),
            b'|' => self.pipe(start),

            b'%' => self.single(start, TokenKind::Mod),
            b'^' => self.single(start, TokenKind::Pow),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b':' => self.single(start, TokenKind::Colon),
            b';' => self.single(start, TokenKind::Semicol),
            b',' => self.single(start, TokenKind::Comma),
            b'.' => self.single(start, TokenKind::Dot),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            b'[' => self.single(start, TokenKind::LBracket),
            b']' => self.single(start, TokenKind::RBracket),

            // Not EOF (checked by the caller), so this is a NUL in the source.
            0 => {
                self.bump();
                self.illegal(IllegalKind::InteriorNull, start);
            }
            _ => {
                let c = self.cursor.current_char();
                self.bump();
                self.illegal(IllegalKind::UnknownChar(c), start);
            }
        }
    }

    // ─── Position bookkeeping ───────────────────────────────────────────

    #[inline]
    fn mark(&self) -> Mark {
        Mark {
            pos: self.cursor.pos(),
            column: self.column,
        }
    }

    /// Consume one character, keeping `line` and `column` in step.
    #[inline]
    fn bump(&mut self) {
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.line += 1;
            self.column = 1;
        } else {
            self.cursor.advance_char();
            self.column += 1;
        }
    }

    /// Flags for the token about to be pushed; resets the pending trivia.
    fn take_flags(&mut self) -> TokenFlags {
        let mut flags = std::mem::take(&mut self.pending);
        if !flags.intersects(TokenFlags::SPACE_BEFORE | TokenFlags::NEWLINE_BEFORE)
            && !self.tokens.is_empty()
        {
            flags |= TokenFlags::ADJACENT;
        }
        flags
    }

    /// Push a token covering everything consumed since `start`.
    fn emit(&mut self, kind: TokenKind, value: Option<TokenValue>, start: Mark) {
        let token = Token::new(kind, value, self.line, start.column, self.column - 1)
            .with_span(Span::new(start.pos, self.cursor.pos()));
        let flags = self.take_flags();
        self.tokens.push(token);
        self.flags.push(flags);
    }

    fn illegal(&mut self, kind: IllegalKind, start: Mark) {
        trace!(
            line = self.line,
            column = start.column,
            reason = %kind,
            "illegal token"
        );
        self.emit(TokenKind::Illegal, Some(TokenValue::Illegal(kind)), start);
    }

    // ─── Punctuation ────────────────────────────────────────────────────

    fn single(&mut self, start: Mark, kind: TokenKind) {
        self.bump();
        self.emit(kind, None, start);
    }

    /// Greedy two-character match: if the byte after the prefix completes a
    /// compound operator, take both; otherwise emit the single-character
    /// token and leave the next byte for the following iteration.
    fn prefixed(&mut self, start: Mark, single: TokenKind, compounds: &[(u8, TokenKind)]) {
        let next = self.cursor.peek();
        self.bump();
        let kind = match compounds.iter().find(|&&(second, _)| second == next) {
            Some(&(_, compound)) => {
                self.bump();
                compound
            }
            None => single,
        };
        self.emit(kind, None, start);
    }

    /// `||`, or an illegal lone `|`.
    fn pipe(&mut self, start: Mark) {
        let doubled = self.cursor.peek() == b'|';
        self.bump();
        if doubled {
            self.bump();
            self.emit(TokenKind::Or, None, start);
        } else {
            self.illegal(IllegalKind::LonePipe, start);
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn identifier(&mut self, start: Mark) {
        // ASCII only, so bytes and columns advance together.
        self.column += self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start.pos);
        let (kind, value) = match keywords::lookup(text) {
            Some(Word::Keyword(kw)) => (TokenKind::Keyword, TokenValue::Keyword(kw)),
            Some(Word::Bool(b)) => (TokenKind::Bool, TokenValue::Bool(b)),
            None => (TokenKind::Ident, TokenValue::Ident(text.to_owned())),
        };
        self.emit(kind, Some(value), start);
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests;
