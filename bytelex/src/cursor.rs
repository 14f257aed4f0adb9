use crate::bytes::EOF;
use crate::error::{LexError, Result};
use crate::position::Position;

/// A forward-only read head over an immutable byte buffer.
///
/// The cursor holds a *current* byte loaded by the last [`advance`](Cursor::advance).
/// A freshly created cursor has no current byte and reports EOF until it is
/// advanced once. End of input is tracked out of band, so a literal `0x00`
/// inside the buffer is an ordinary byte and only [`char`](Cursor::char)
/// falls back to the [`EOF`] sentinel once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Cursor<'input> {
    content: &'input [u8],
    current: Option<u8>,
    position: usize,
}

impl<'input> Cursor<'input> {
    /// Creates a new cursor over `content`. The cursor must be advanced once
    /// before the first byte becomes current.
    pub fn new(content: &'input [u8]) -> Self {
        Self {
            content,
            current: None,
            position: 0,
        }
    }

    /// Creates a cursor from a possibly absent buffer.
    ///
    /// `None` fails with [`LexError::EmptyContent`]; an empty slice is legal.
    pub fn try_new(content: Option<&'input [u8]>) -> Result<Self> {
        content.map(Self::new).ok_or(LexError::EmptyContent)
    }

    /// Loads the next unread byte as the current byte.
    ///
    /// Once the buffer is exhausted the cursor stays at EOF and the position
    /// no longer moves.
    pub fn advance(&mut self) {
        match self.content.get(self.position) {
            Some(&byte) => {
                self.current = Some(byte);
                self.position += 1;
            }
            None => self.current = None,
        }
    }

    /// Returns the current byte, or [`EOF`] when there is none.
    #[inline]
    pub fn char(&self) -> u8 {
        self.current.unwrap_or(EOF)
    }

    /// Returns the current byte, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Returns true if there is no current byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the zero-based index of the next byte to read.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the total buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the offset of the current byte, or the buffer length at EOF.
    pub fn offset(&self) -> usize {
        match self.current {
            Some(_) => self.position - 1,
            None => self.position,
        }
    }

    /// Returns the line/column location of the current byte.
    pub fn location(&self) -> Position {
        Position::locate(self.content, self.offset())
    }

    /// Returns the next unread byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.content.get(self.position).copied()
    }

    /// Returns the unread part of the buffer (excluding the current byte).
    pub fn remaining(&self) -> &'input [u8] {
        &self.content[self.position..]
    }

    /// Returns the whole underlying buffer.
    pub fn content(&self) -> &'input [u8] {
        self.content
    }

    /// Collects the current byte and every following byte while `predicate`
    /// holds, leaving the cursor on the first rejected byte (or EOF).
    pub fn consume_while<F>(&mut self, mut predicate: F) -> Vec<u8>
    where
        F: FnMut(u8) -> bool,
    {
        let mut consumed = Vec::new();
        while let Some(byte) = self.current {
            if !predicate(byte) {
                break;
            }
            consumed.push(byte);
            self.advance();
        }
        consumed
    }
}
