//! Reserved-word and boolean-literal resolution for identifiers.
//!
//! The lookup uses the identifier's length as a first-pass filter (keywords
//! are 2-8 chars), then matches against the words of that length.

use brisk_ir::Keyword;

/// What an identifier-shaped lexeme resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Word {
    Keyword(Keyword),
    Bool(bool),
}

/// Look up a reserved word or boolean literal by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Word> {
    let bytes = text.as_bytes();
    if !(2..=8).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    let kw = match bytes.len() {
        2 => match text {
            "fn" => Keyword::Fn,
            "if" => Keyword::If,
            "in" => Keyword::In,
            _ => return None,
        },
        3 => match text {
            "for" => Keyword::For,
            "let" => Keyword::Let,
            _ => return None,
        },
        4 => match text {
            "else" => Keyword::Else,
            "true" => return Some(Word::Bool(true)),
            _ => return None,
        },
        5 => match text {
            "break" => Keyword::Break,
            "const" => Keyword::Const,
            "while" => Keyword::While,
            "false" => return Some(Word::Bool(false)),
            _ => return None,
        },
        6 => match text {
            "return" => Keyword::Return,
            "struct" => Keyword::Struct,
            _ => return None,
        },
        8 => match text {
            "continue" => Keyword::Continue,
            _ => return None,
        },
        _ => return None,
    };
    Some(Word::Keyword(kw))
}
