//! The finished token sequence.

use std::fmt;

use super::{Token, TokenCursor, TokenFlags, TokenKind};

/// Owned, EOF-terminated token sequence.
///
/// Carries a parallel array of [`TokenFlags`], one per token, describing the
/// trivia that preceded it.
///
/// # Invariant
///
/// The list is never empty and its last token, and only its last token, has
/// kind [`TokenKind::Eof`]. Nothing mutates it after construction, so it can
/// be shared across threads freely.
#[derive(Clone, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `flags[i]` captures whitespace context for `tokens[i]`.
    flags: Vec<TokenFlags>,
}

impl TokenList {
    /// Build the list from tokens and their flags.
    ///
    /// The tokenizer is the only producer; callers must pass an EOF-terminated
    /// sequence with one flag entry per token.
    pub fn from_parts(tokens: Vec<Token>, flags: Vec<TokenFlags>) -> Self {
        debug_assert_eq!(tokens.len(), flags.len(), "one flag entry per token");
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token list must end with EOF"
        );
        debug_assert_eq!(
            tokens.iter().filter(|t| t.is_eof()).count(),
            1,
            "exactly one EOF token"
        );
        TokenList { tokens, flags }
    }

    /// Number of tokens, including the trailing EOF.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: the EOF token is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The trailing EOF token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Flags for the token at `index`.
    #[inline]
    pub fn flag(&self, index: usize) -> TokenFlags {
        self.flags[index]
    }

    #[inline]
    pub fn flags(&self) -> &[TokenFlags] {
        &self.flags
    }

    /// Kinds in order, EOF included. Handy for tests and dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Start a forward-only traversal positioned before the first token.
    #[inline]
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(self)
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
