//! Lexer for a tiny scripting language, exercising every category.
//!
//! Usage: `mini-lexer [FILE]`. Without a file a built-in sample is used.

use bytelex::rules::{DelimitedRule, LineRule, RangeRule, SingleByteRule};
use bytelex::{ByteRange, Category, Cursor, Lexer, LexerSettings, Token, TokenType};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"# compute a greeting
let count = 3;
fn greet(name) {
    print("hello, " + name);
}
greet("world"); # done
"#;

const KEYWORDS: [&[u8]; 3] = [b"let", b"fn", b"return"];

/// Identifiers, promoted to keywords when reserved.
fn lex_word(c: &mut Cursor<'_>) -> Token {
    let word = c.consume_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    let kind = if KEYWORDS.contains(&word.as_slice()) {
        TokenType::Keyword
    } else {
        TokenType::Identifier
    };
    Token::new(kind, word)
}

fn build_lexer() -> bytelex::Result<Lexer> {
    let digits = ByteRange::single(b'0', b'9');
    let settings = LexerSettings::new()
        .with_numbers(digits.clone())
        .with_chars(ByteRange::single(b'a', b'z'))
        .with_plain_chars(b"_ABCDEFGHIJKLMNOPQRSTUVWXYZ")
        .with_string(b"\"")
        .with_comment(b"#")
        .with_delimiter(b"(){},;=+-*/")
        .with_ignore(b" \t\r\n");

    let mut lexer = Lexer::new(settings)?;
    lexer
        .add_rule(Category::Number, RangeRule::new(TokenType::Number, digits))
        .add_rule(
            Category::String,
            DelimitedRule::new(TokenType::String, b"\"").with_escape(b'\\'),
        )
        .add_rule(Category::Comment, LineRule::new(TokenType::Comment))
        .add_rule(Category::Delimiter, SingleByteRule::new(TokenType::Delimiter))
        .lex_identifier(lex_word);
    Ok(lexer)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let result = build_lexer().and_then(|lexer| lexer.tokenize(&source));
    match result {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:<10} {:?}", token.kind(), String::from_utf8_lossy(token.value()));
            }
            println!("\n{} tokens", tokens.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
