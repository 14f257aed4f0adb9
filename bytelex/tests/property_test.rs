//! Property tests over whole tokenizations.

use bytelex::rules::{RangeRule, SingleByteRule};
use bytelex::{ByteRange, Category, Cursor, LexError, Lexer, LexerSettings, Token, TokenType};
use proptest::prelude::*;

fn digit_lexer() -> Lexer {
    let settings = LexerSettings::new()
        .with_numbers(ByteRange::single(b'0', b'9'))
        .with_ignore(b" ")
        .with_delimiter(b" ;");
    let mut lexer = Lexer::new(settings).unwrap();
    lexer
        .add_rule(
            Category::Number,
            RangeRule::new(TokenType::Number, ByteRange::single(b'0', b'9')),
        )
        .add_rule(Category::Delimiter, SingleByteRule::new(TokenType::Delimiter));
    lexer
}

proptest! {
    #[test]
    fn numbers_survive_tokenization(numbers in proptest::collection::vec(0u32..100_000, 0..20)) {
        let input = numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = digit_lexer().tokenize(&input).unwrap();
        let values: Vec<String> = tokens
            .iter()
            .map(|t| t.as_str().unwrap_or_default().to_owned())
            .collect();
        let expected: Vec<String> = numbers.iter().map(u32::to_string).collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn ignored_bytes_never_become_tokens(input in "[0-9 ;]{0,64}") {
        let tokens = digit_lexer().tokenize(&input).unwrap();
        prop_assert!(tokens.iter().all(|t| t.value() != b" "));
        let delimiters = tokens.iter().filter(|t| t.kind() == TokenType::Delimiter).count();
        prop_assert_eq!(delimiters, input.bytes().filter(|&b| b == b';').count());
    }

    #[test]
    fn tokenization_is_deterministic(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        let first = digit_lexer().tokenize(&input);
        let second = digit_lexer().tokenize(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failure_reports_first_unknown_byte(input in proptest::collection::vec(any::<u8>(), 1..64)) {
        let known = |b: u8| b.is_ascii_digit() || b == b' ' || b == b';';
        match digit_lexer().tokenize(&input) {
            Ok(_) => prop_assert!(input.iter().all(|&b| known(b))),
            Err(LexError::UnexpectedByte { byte, position }) => {
                let first = input.iter().position(|&b| !known(b));
                prop_assert_eq!(first, Some(position.offset));
                prop_assert_eq!(input[position.offset], byte);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn cursor_position_counts_advances(input in proptest::collection::vec(any::<u8>(), 0..64), extra in 0usize..8) {
        let mut cursor = Cursor::new(&input);
        for n in 1..=input.len() {
            cursor.advance();
            prop_assert_eq!(cursor.position(), n);
            prop_assert_eq!(cursor.current(), Some(input[n - 1]));
        }
        for _ in 0..=extra {
            cursor.advance();
            prop_assert!(cursor.is_eof());
            prop_assert_eq!(cursor.position(), input.len());
        }
    }
}

#[test]
fn test_token_order_matches_input_order() {
    let tokens = digit_lexer().tokenize("3;2;1").unwrap();
    let kinds: Vec<TokenType> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Number,
            TokenType::Delimiter,
            TokenType::Number,
            TokenType::Delimiter,
            TokenType::Number,
        ]
    );
}
