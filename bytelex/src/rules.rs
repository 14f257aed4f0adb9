//! Ready-made lexing rules covering the common token shapes.

use crate::bytes::{ByteRange, BytePoints};
use crate::cursor::Cursor;
use crate::token::{Token, TokenType};
use crate::traits::LexingRule;

/// Consumes bytes while they are in a range (or in an optional extra
/// point set), e.g. digits or identifier characters.
#[derive(Debug, Clone)]
pub struct RangeRule {
    kind: TokenType,
    range: ByteRange,
    extra: BytePoints,
}

impl RangeRule {
    pub fn new(kind: TokenType, range: ByteRange) -> Self {
        Self {
            kind,
            range,
            extra: BytePoints::Never,
        }
    }

    /// Also accepts the given points, e.g. `_` in identifiers.
    pub fn with_points(mut self, extra: impl Into<BytePoints>) -> Self {
        self.extra = extra.into();
        self
    }

    fn accepts(&self, byte: u8) -> bool {
        self.range.is_in_range(byte) || self.extra.has_point(byte)
    }
}

impl LexingRule for RangeRule {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        Token::new(self.kind, cursor.consume_while(|b| self.accepts(b)))
    }
}

/// Consumes bytes while they belong to a point set, e.g. runs of operators.
#[derive(Debug, Clone)]
pub struct PointsRule {
    kind: TokenType,
    points: BytePoints,
}

impl PointsRule {
    pub fn new(kind: TokenType, points: impl Into<BytePoints>) -> Self {
        Self {
            kind,
            points: points.into(),
        }
    }
}

impl LexingRule for PointsRule {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        Token::new(self.kind, cursor.consume_while(|b| self.points.has_point(b)))
    }
}

/// Consumes exactly the current byte.
#[derive(Debug, Clone, Copy)]
pub struct SingleByteRule {
    kind: TokenType,
}

impl SingleByteRule {
    pub fn new(kind: TokenType) -> Self {
        Self { kind }
    }
}

impl LexingRule for SingleByteRule {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        let value = match cursor.current() {
            Some(byte) => {
                cursor.advance();
                vec![byte]
            }
            None => Vec::new(),
        };
        Token::new(self.kind, value)
    }
}

/// Consumes a body up to a closing marker, for strings.
///
/// The opening marker has already been consumed by the engine. The closing
/// marker is consumed but not part of the token. An escape byte keeps the
/// byte after it in the body even if it is a closing marker. Unterminated
/// bodies run to end of input.
#[derive(Debug, Clone)]
pub struct DelimitedRule {
    kind: TokenType,
    close: BytePoints,
    escape: Option<u8>,
}

impl DelimitedRule {
    pub fn new(kind: TokenType, close: impl Into<BytePoints>) -> Self {
        Self {
            kind,
            close: close.into(),
            escape: None,
        }
    }

    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = Some(escape);
        self
    }
}

impl LexingRule for DelimitedRule {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        let mut value = Vec::new();
        while let Some(byte) = cursor.current() {
            cursor.advance();
            if self.close.has_point(byte) {
                break;
            }
            value.push(byte);
            if self.escape == Some(byte) {
                if let Some(escaped) = cursor.current() {
                    value.push(escaped);
                    cursor.advance();
                }
            }
        }
        Token::new(self.kind, value)
    }
}

/// Consumes up to the end of the line, for line comments.
///
/// The newline itself is left for the engine (typically ignored).
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    kind: TokenType,
}

impl LineRule {
    pub fn new(kind: TokenType) -> Self {
        Self { kind }
    }
}

impl LexingRule for LineRule {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        Token::new(self.kind, cursor.consume_while(|b| b != b'\n'))
    }
}
