use crate::cursor::Cursor;
use crate::token::Token;

/// A lexing callback registered for one category.
///
/// When invoked, the cursor sits on the first byte of the token the rule is
/// responsible for (or just past an opening marker, for strings and
/// comments). The rule consumes its token's bytes, leaves the cursor on the
/// first byte that is not part of the token, and returns exactly one token.
/// The cursor must not be retained beyond the call.
pub trait LexingRule: Send + Sync {
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token;
}

impl<F> LexingRule for F
where
    F: Fn(&mut Cursor<'_>) -> Token + Send + Sync,
{
    fn lex(&self, cursor: &mut Cursor<'_>) -> Token {
        self(cursor)
    }
}
