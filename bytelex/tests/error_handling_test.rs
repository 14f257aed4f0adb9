//! Error handling and boundary scenario tests.

use bytelex::{
    ByteRange, Category, Cursor, LexError, Lexer, LexerSettings, Position, Token, TokenType,
};

fn digits_only() -> Lexer {
    let settings = LexerSettings::new().with_numbers(ByteRange::single(b'0', b'9'));
    let mut lexer = Lexer::new(settings).unwrap();
    lexer.lex_number(|c: &mut Cursor<'_>| {
        Token::new(TokenType::Number, c.consume_while(|b| b.is_ascii_digit()))
    });
    lexer
}

#[test]
fn test_unexpected_byte_discards_tokens() {
    let err = digits_only().tokenize("1a").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedByte {
            byte: b'a',
            position: Position::at(1, 2, 1),
        }
    );
}

#[test]
fn test_unexpected_byte_message_names_the_byte() {
    let err = digits_only().tokenize("12\n3?").unwrap_err();
    assert_eq!(err.to_string(), "unexpected byte '\\n' (0x0a) at line 1, column 3");

    let err = digits_only().tokenize("42x").unwrap_err();
    assert_eq!(err.to_string(), "unexpected byte 'x' (0x78) at line 1, column 3");
}

#[test]
fn test_unexpected_byte_on_first_byte() {
    let err = digits_only().tokenize("?").unwrap_err();
    assert_eq!(err.position(), Some(Position::new()));
}

#[test]
fn test_unconfigured_settings_reject_everything() {
    let lexer = Lexer::new(LexerSettings::default()).unwrap();
    for byte in [b'a', b'0', b' ', b'"', 0xff] {
        let err = lexer.tokenize([byte]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedByte { byte: b, .. } if b == byte));
    }
}

#[test]
fn test_absent_buffer() {
    let lexer = digits_only();
    assert_eq!(lexer.try_tokenize(None), Err(LexError::EmptyContent));
}

#[test]
fn test_present_empty_buffer_is_fine() {
    let lexer = digits_only();
    assert_eq!(lexer.try_tokenize(Some(&[][..])), Ok(vec![]));
}

#[test]
fn test_number_without_callbacks_stalls() {
    let settings = LexerSettings::new().with_numbers(ByteRange::single(b'0', b'9'));
    let lexer = Lexer::new(settings).unwrap();

    let err = lexer.tokenize("7").unwrap_err();
    assert_eq!(
        err,
        LexError::Stalled {
            category: Category::Number,
            position: Position::new(),
        }
    );
    assert_eq!(err.to_string(), "number callbacks made no progress at line 1, column 1");
}

#[test]
fn test_callback_that_never_advances_stalls() {
    let settings = LexerSettings::new()
        .with_delimiter(b";")
        .with_ignore(b" ");
    let mut lexer = Lexer::new(settings).unwrap();
    lexer.lex_delimiter(|c: &mut Cursor<'_>| Token::new(TokenType::Delimiter, vec![c.char()]));

    let err = lexer.tokenize("  ;").unwrap_err();
    assert_eq!(
        err,
        LexError::Stalled {
            category: Category::Delimiter,
            position: Position::at(1, 3, 2),
        }
    );
}

#[test]
fn test_callback_reaching_eof_is_progress() {
    let settings = LexerSettings::new().with_chars(ByteRange::single(b'a', b'z'));
    let mut lexer = Lexer::new(settings).unwrap();
    lexer.lex_identifier(|c: &mut Cursor<'_>| {
        let value = vec![c.char()];
        c.advance();
        Token::new(TokenType::Identifier, value)
    });

    let tokens = lexer.tokenize("z").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenType::Identifier, "z")]);
}

#[test]
fn test_error_after_many_tokens_returns_nothing() {
    let settings = LexerSettings::new()
        .with_numbers(ByteRange::single(b'0', b'9'))
        .with_ignore(b" ");
    let mut lexer = Lexer::new(settings).unwrap();
    lexer.lex_number(|c: &mut Cursor<'_>| {
        Token::new(TokenType::Number, c.consume_while(|b| b.is_ascii_digit()))
    });

    let input = "1 2 3 4 5 6 7 8 9 !";
    let result = lexer.tokenize(input);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().position(),
        Some(Position::at(1, 19, 18))
    );
}
