use std::fmt;

use serde::Serialize;

/// A single lexical unit produced by the [`Tokenizer`](crate::Tokenizer).
///
/// Structural tokens carry no payload. Every `BoldStart`/`ItalicStart` emitted for a line
/// is matched by the corresponding `*End` later in the same line; spans that cannot be
/// matched never produce these tokens and survive as `Text` instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    Text(String),
    Newline,
    Header,
    BoldStart,
    BoldEnd,
    ItalicStart,
    ItalicEnd,
}

impl Token {
    /// Payload of a `Text` token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Newline
            | Self::Header
            | Self::BoldStart
            | Self::BoldEnd
            | Self::ItalicStart
            | Self::ItalicEnd => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => write!(f, "TEXT({content:?})"),
            Self::Newline => write!(f, "NEWLINE"),
            Self::Header => write!(f, "HEADER"),
            Self::BoldStart => write!(f, "BOLD_START"),
            Self::BoldEnd => write!(f, "BOLD_END"),
            Self::ItalicStart => write!(f, "ITALIC_START"),
            Self::ItalicEnd => write!(f, "ITALIC_END"),
        }
    }
}
