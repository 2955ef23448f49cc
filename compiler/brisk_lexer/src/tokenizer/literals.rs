//! Number, string and character literals.

use brisk_ir::{IllegalKind, TokenKind, TokenValue};

use super::{Mark, Tokenizer};
use crate::escape::resolve_escape;

impl Tokenizer<'_> {
    /// `[0-9]+` or `[0-9]+ '.' [0-9]+`.
    ///
    /// A dot not followed by a digit is left alone, so `1.` is an integer
    /// followed by a dot.
    pub(super) fn number(&mut self, start: Mark) {
        self.column += self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.column += 1;
            self.column += self.cursor.eat_while(|b| b.is_ascii_digit());
            // Digits, a dot and digits always parse; out-of-range values
            // round to infinity.
            let parsed = self.cursor.slice_from(start.pos).parse::<f64>();
            debug_assert!(parsed.is_ok(), "unparsable float literal");
            let value = parsed.unwrap_or(f64::INFINITY);
            self.emit(TokenKind::Float, Some(TokenValue::Float(value)), start);
            return;
        }

        match self.cursor.slice_from(start.pos).parse::<i64>() {
            Ok(v) => self.emit(TokenKind::Int, Some(TokenValue::Int(v)), start),
            Err(_) => self.illegal(IllegalKind::IntOverflow, start),
        }
    }

    pub(super) fn string(&mut self, start: Mark) {
        match self.quoted(b'"', IllegalKind::UnterminatedString) {
            Ok(text) => self.emit(TokenKind::String, Some(TokenValue::Str(text)), start),
            Err(kind) => self.illegal(kind, start),
        }
    }

    pub(super) fn char_literal(&mut self, start: Mark) {
        let text = match self.quoted(b'\'', IllegalKind::UnterminatedChar) {
            Ok(text) => text,
            Err(kind) => return self.illegal(kind, start),
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => self.illegal(IllegalKind::EmptyChar, start),
            (Some(c), None) => self.emit(TokenKind::Char, Some(TokenValue::Char(c)), start),
            (Some(_), Some(_)) => self.illegal(IllegalKind::MultiCharLiteral, start),
        }
    }

    /// Scan a single-line quoted body starting at the opening `quote`,
    /// returning its contents with escapes resolved.
    ///
    /// On a newline or EOF before the closing quote, stops without consuming
    /// the newline and returns `unterminated`. An unknown escape consumes the
    /// rest of the literal and reports the first offending character.
    fn quoted(&mut self, quote: u8, unterminated: IllegalKind) -> Result<String, IllegalKind> {
        self.bump();
        let mut text = String::new();
        let mut bad_escape = None;

        loop {
            let segment_start = self.cursor.pos();
            let delim = self.cursor.skip_to_literal_delim(quote);
            let segment = self.cursor.slice_from(segment_start);
            self.column += char_count(segment);
            text.push_str(segment);

            match delim {
                b'\\' => {
                    self.bump();
                    if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                        return Err(unterminated);
                    }
                    let c = self.cursor.current_char();
                    self.bump();
                    match resolve_escape(c) {
                        Some(resolved) => text.push(resolved),
                        None => {
                            bad_escape.get_or_insert(c);
                        }
                    }
                }
                // Newline or end of input.
                other if other != quote => return Err(unterminated),
                _ => {
                    self.bump();
                    break;
                }
            }
        }

        match bad_escape {
            Some(c) => Err(IllegalKind::InvalidEscape(c)),
            None => Ok(text),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "segments are slices of a source whose length fits in u32"
)]
fn char_count(s: &str) -> u32 {
    s.chars().count() as u32
}
