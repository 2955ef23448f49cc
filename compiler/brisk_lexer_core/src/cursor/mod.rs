//! Position-tracking reader over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never go out of bounds: past the last source byte the buffer holds
//! `0x00`. A zero byte therefore means EOF only when the position has also
//! reached `source_len`; before that it is a NUL in the source text.

/// Byte position within a sentinel-terminated buffer.
///
/// `Copy`, so a tokenizer can snapshot it for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by at least one `0x00`.
    buf: &'a [u8],
    pos: u32,
    /// Bytes of real source; `buf[source_len]` is the sentinel.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(buf.len() > source_len as usize, "missing sentinel");
        debug_assert_eq!(buf[source_len as usize], 0, "sentinel must be zero");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte after the current one. Yields `0x00` at and beyond the end of the
    /// source, so one byte of lookahead is always available.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos as usize + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.source_len, "advance at EOF");
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.source_len, "advance_n beyond EOF");
        self.pos += n;
    }

    /// `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text in `start..end`.
    ///
    /// Both offsets must lie within the source and on character boundaries.
    /// The tokenizer only cuts where it stopped after whole-character moves.
    #[allow(
        unsafe_code,
        reason = "buffer bytes come from a &str and both offsets are char boundaries"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        let bytes = &self.buf[start as usize..end as usize];
        debug_assert!(std::str::from_utf8(bytes).is_ok(), "slice splits a character");
        // SAFETY: copied from valid UTF-8 and cut on character boundaries.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Skip bytes matching `pred` and return how many were skipped.
    ///
    /// `pred(0)` must be `false`; the sentinel then bounds the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let from = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - from
    }

    /// Encoded length of the character whose first byte is `lead`.
    ///
    /// Continuation and invalid lead bytes count as 1 so that a walk always
    /// makes progress.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xF0..=0xF7 => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        }
    }

    /// Character starting at the cursor. Not meaningful at EOF.
    pub fn current_char(&self) -> char {
        let end = (self.pos + Self::utf8_char_width(self.current())).min(self.source_len);
        self.slice(self.pos, end)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Step over the character starting at the cursor.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// Jump to the next `quote`, `\` or `\n` and return it, or move to EOF
    /// and return `0` when none remains.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the offset is below source_len, a u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let rest = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr3(quote, b'\\', b'\n', rest) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }
}
