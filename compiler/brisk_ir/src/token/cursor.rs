//! Forward-only traversal over a [`TokenList`].

use super::{Token, TokenFlags, TokenList};

/// Cursor over a finished token sequence.
///
/// Starts *before* the first token: call [`advance`](Self::advance) once to
/// land on it. The cursor only borrows the list, so any number of cursors
/// can walk the same tokens independently.
///
/// Consumers should stick to `advance`/`current`/`peek_next` rather than
/// indexing the list, so a streaming tokenizer can replace the materialized
/// one later.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    flags: &'a [TokenFlags],
    /// Number of successful-or-not advances, saturating at `len + 1`.
    /// The current token is `tokens[next - 1]`.
    next: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(list: &'a TokenList) -> Self {
        TokenCursor {
            tokens: list.as_slice(),
            flags: list.flags(),
            next: 0,
        }
    }

    /// Move forward one token.
    ///
    /// Returns `true` while the new position holds a token. Once the cursor
    /// has moved past EOF it stays there and keeps returning `false`.
    pub fn advance(&mut self) -> bool {
        if self.next <= self.tokens.len() {
            self.next += 1;
        }
        self.next <= self.tokens.len()
    }

    /// Token at the current position.
    ///
    /// `None` before the first [`advance`](Self::advance) and after moving
    /// past EOF.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.next.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Trivia flags of the current token.
    #[inline]
    pub fn current_flags(&self) -> Option<TokenFlags> {
        self.next.checked_sub(1).and_then(|i| self.flags.get(i)).copied()
    }

    /// Token one position ahead, without moving. `None` at or past EOF.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.next)
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TokenCursor<'_> {}
