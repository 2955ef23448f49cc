//! Per-token trivia flags.

use bitflags::bitflags;

bitflags! {
    /// Whitespace context preceding a token, packed into one byte.
    ///
    /// The tokenizer drops whitespace and newlines, so these bits are the
    /// only record of layout a parser or formatter gets.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Spaces, tabs or `\r` preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// First token on its line.
        const LINE_START = 1 << 2;
        /// Nothing separates this token from the previous one.
        const ADJACENT = 1 << 3;
    }
}
