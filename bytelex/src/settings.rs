use crate::bytes::{ByteRange, BytePoints};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binds each recognized category to a byte predicate.
///
/// Every field defaults to the never-matching variant, so a lexer built from
/// partially filled settings still has a concrete predicate per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerSettings {
    pub numbers: ByteRange,
    pub chars: ByteRange,
    pub string: BytePoints,
    pub delimiter: BytePoints,
    pub ignore: BytePoints,
    pub comment: BytePoints,
    pub plain_chars: BytePoints,
}

impl LexerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(mut self, numbers: ByteRange) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn with_chars(mut self, chars: ByteRange) -> Self {
        self.chars = chars;
        self
    }

    pub fn with_string(mut self, string: impl Into<BytePoints>) -> Self {
        self.string = string.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<BytePoints>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_ignore(mut self, ignore: impl Into<BytePoints>) -> Self {
        self.ignore = ignore.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<BytePoints>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_plain_chars(mut self, plain_chars: impl Into<BytePoints>) -> Self {
        self.plain_chars = plain_chars.into();
        self
    }
}
