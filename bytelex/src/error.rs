use crate::lexer::Category;
use crate::position::Position;

/// Errors produced while setting up or running a tokenization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The cursor was handed no buffer at all (as opposed to an empty one).
    #[error("the cursor's content cannot be absent")]
    EmptyContent,

    /// The current byte matched none of the configured categories.
    #[error("unexpected byte '{}' (0x{byte:02x}) at {position}", escape(.byte))]
    UnexpectedByte { byte: u8, position: Position },

    /// A category dispatch left the cursor exactly where it started.
    #[error("{category} callbacks made no progress at {position}")]
    Stalled { category: Category, position: Position },
}

impl LexError {
    /// Returns the position the error refers to, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::EmptyContent => None,
            LexError::UnexpectedByte { position, .. } | LexError::Stalled { position, .. } => {
                Some(*position)
            }
        }
    }
}

fn escape(byte: &u8) -> String {
    std::ascii::escape_default(*byte).to_string()
}

pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_byte_message() {
        let err = LexError::UnexpectedByte {
            byte: b'a',
            position: Position::at(1, 2, 1),
        };
        assert_eq!(err.to_string(), "unexpected byte 'a' (0x61) at line 1, column 2");
    }

    #[test]
    fn test_unexpected_byte_escapes_control_bytes() {
        let err = LexError::UnexpectedByte {
            byte: b'\n',
            position: Position::new(),
        };
        assert_eq!(err.to_string(), "unexpected byte '\\n' (0x0a) at line 1, column 1");
    }

    #[test]
    fn test_position_accessor() {
        assert_eq!(LexError::EmptyContent.position(), None);
        let err = LexError::Stalled {
            category: Category::Number,
            position: Position::at(1, 1, 0),
        };
        assert_eq!(err.position(), Some(Position::at(1, 1, 0)));
    }
}
