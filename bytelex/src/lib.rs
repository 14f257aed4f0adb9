//! A configurable byte-level tokenizer engine.
//!
//! The engine classifies each byte of the input with the predicates in
//! [`LexerSettings`] and hands the [`Cursor`] to the callbacks registered for
//! the matching [`Category`]. Callbacks consume the token body and return a
//! [`Token`]; the engine collects them or fails with a [`LexError`].
//!
//! ```
//! use bytelex::{ByteRange, Cursor, Lexer, LexerSettings, Token, TokenType};
//!
//! let digits = ByteRange::single(b'0', b'9');
//! let settings = LexerSettings::new()
//!     .with_numbers(digits.clone())
//!     .with_ignore(b" ");
//!
//! let mut lexer = Lexer::new(settings)?;
//! lexer.lex_number(move |c: &mut Cursor<'_>| {
//!     Token::new(TokenType::Number, c.consume_while(|b| digits.is_in_range(b)))
//! });
//!
//! let tokens = lexer.tokenize("12 34")?;
//! assert_eq!(tokens[0].value(), b"12");
//! assert_eq!(tokens[1].value(), b"34");
//! # Ok::<(), bytelex::LexError>(())
//! ```

pub mod bytes;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod position;
pub mod rules;
pub mod settings;
pub mod token;
pub mod traits;

pub use bytes::{ByteRange, BytePoints, EOF};
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{Category, Lexer};
pub use position::Position;
pub use settings::LexerSettings;
pub use token::{Token, TokenType};
pub use traits::LexingRule;
