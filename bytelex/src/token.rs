use std::fmt;

/// The kind of a token.
///
/// The engine itself only dispatches to Number, String, Identifier,
/// Delimiter and Comment callbacks; `Keyword` exists for callbacks that
/// promote identifiers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Number,
    String,
    Identifier,
    Keyword,
    Delimiter,
    Comment,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Number => "number",
            TokenType::String => "string",
            TokenType::Identifier => "identifier",
            TokenType::Keyword => "keyword",
            TokenType::Delimiter => "delimiter",
            TokenType::Comment => "comment",
        };
        f.pad(name)
    }
}

/// An immutable pairing of raw bytes with a token type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: Vec<u8>,
    kind: TokenType,
}

impl Token {
    /// Creates a token. The bytes are not validated; an empty value is fine.
    pub fn new(kind: TokenType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Returns the raw bytes consumed for this token.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Returns the value as text if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, String::from_utf8_lossy(&self.value))
    }
}
