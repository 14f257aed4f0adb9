//! Digit lexer: splits space-separated numbers into tokens.
//!
//! Usage: `number-lexer [INPUT]`. Set `RUST_LOG=debug` to see engine logs.

use bytelex::{ByteRange, BytePoints, Cursor, Lexer, LexerSettings, Token, TokenType};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const NUMBERS: ByteRange = ByteRange::Single {
    from: 0x30,
    to: 0x39,
};

fn lex_numbers(c: &mut Cursor<'_>) -> Token {
    let mut value = vec![c.char()];
    c.advance();

    while NUMBERS.is_in_range(c.char()) {
        value.push(c.char());
        c.advance();
    }

    Token::new(TokenType::Number, value)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "001100 987654321 123 456 789".to_string());

    let settings = LexerSettings::new()
        .with_numbers(NUMBERS)
        .with_ignore(BytePoints::new([0x20]));

    let mut lexer = match Lexer::new(settings) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("lexer error: {err}");
            return ExitCode::FAILURE;
        }
    };
    lexer.lex_number(lex_numbers);

    match lexer.tokenize(&input) {
        Ok(tokens) => {
            println!("Tokenizing: {input}\n");
            println!("Tokens:");
            for (i, token) in tokens.iter().enumerate() {
                println!("  {i}: {token}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tokenize error: {err}");
            ExitCode::FAILURE
        }
    }
}
