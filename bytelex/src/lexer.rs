use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::settings::LexerSettings;
use crate::token::{Token, TokenType};
use crate::traits::LexingRule;
use std::fmt;
use tracing::{debug, trace};

/// A category with its own ordered list of lexing callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Number,
    String,
    Identifier,
    Delimiter,
    Comment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Number,
        Category::String,
        Category::Identifier,
        Category::Delimiter,
        Category::Comment,
    ];

    /// The token type callbacks of this category normally produce.
    pub fn token_type(self) -> TokenType {
        match self {
            Category::Number => TokenType::Number,
            Category::String => TokenType::String,
            Category::Identifier => TokenType::Identifier,
            Category::Delimiter => TokenType::Delimiter,
            Category::Comment => TokenType::Comment,
        }
    }

    /// Whether the engine consumes the opening marker before dispatching.
    fn skips_marker(self) -> bool {
        matches!(self, Category::String | Category::Comment)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token_type(), f)
    }
}

/// Outcome of classifying a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Ignore,
    Dispatch(Category),
}

/// Per-category ordered callback lists.
#[derive(Default)]
struct CallbackRegistry {
    lists: [Vec<Box<dyn LexingRule>>; 5],
}

impl CallbackRegistry {
    fn register(&mut self, category: Category, rule: Box<dyn LexingRule>) {
        self.lists[category.index()].push(rule);
    }

    fn len(&self, category: Category) -> usize {
        self.lists[category.index()].len()
    }

    /// Runs every callback of `category` in registration order.
    fn lex(&self, category: Category, cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
        for rule in &self.lists[category.index()] {
            tokens.push(rule.lex(cursor));
        }
    }
}

/// The classification-and-dispatch engine.
///
/// Bytes are classified in a fixed priority order: ignore, numbers, string,
/// identifier (chars range or plain chars), comment, delimiter. The first
/// matching category wins.
pub struct Lexer {
    settings: LexerSettings,
    registry: CallbackRegistry,
}

impl Lexer {
    /// Creates a lexer from the given settings.
    ///
    /// Construction currently always succeeds.
    pub fn new(settings: LexerSettings) -> Result<Self> {
        Ok(Self {
            settings,
            registry: CallbackRegistry::default(),
        })
    }

    /// Returns the settings this lexer classifies with.
    pub fn settings(&self) -> &LexerSettings {
        &self.settings
    }

    /// Returns the number of callbacks registered for `category`.
    pub fn rule_count(&self, category: Category) -> usize {
        self.registry.len(category)
    }

    /// Appends a rule to the callback list of `category`.
    pub fn add_rule<R>(&mut self, category: Category, rule: R) -> &mut Self
    where
        R: LexingRule + 'static,
    {
        self.registry.register(category, Box::new(rule));
        self
    }

    pub fn lex_number<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut Cursor<'_>) -> Token + Send + Sync + 'static,
    {
        self.add_rule(Category::Number, f)
    }

    pub fn lex_string<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut Cursor<'_>) -> Token + Send + Sync + 'static,
    {
        self.add_rule(Category::String, f)
    }

    pub fn lex_identifier<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut Cursor<'_>) -> Token + Send + Sync + 'static,
    {
        self.add_rule(Category::Identifier, f)
    }

    pub fn lex_delimiter<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut Cursor<'_>) -> Token + Send + Sync + 'static,
    {
        self.add_rule(Category::Delimiter, f)
    }

    pub fn lex_comment<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut Cursor<'_>) -> Token + Send + Sync + 'static,
    {
        self.add_rule(Category::Comment, f)
    }

    /// Tokenizes `input`.
    ///
    /// Tokenization is all-or-nothing: on error no tokens are returned.
    pub fn tokenize(&self, input: impl AsRef<[u8]>) -> Result<Vec<Token>> {
        self.try_tokenize(Some(input.as_ref()))
    }

    /// Tokenizes a possibly absent buffer; `None` fails with
    /// [`LexError::EmptyContent`].
    pub fn try_tokenize(&self, input: Option<&[u8]>) -> Result<Vec<Token>> {
        let mut cursor = Cursor::try_new(input)?;
        debug!(len = cursor.len(), "tokenizing");

        let result = self.run(&mut cursor);
        match &result {
            Ok(tokens) => debug!(count = tokens.len(), "tokenized"),
            Err(err) => debug!(%err, "tokenization aborted"),
        }
        result
    }

    fn run(&self, cursor: &mut Cursor<'_>) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        cursor.advance();

        while let Some(byte) = cursor.current() {
            let category = match self.classify(byte) {
                Some(Class::Ignore) => {
                    cursor.advance();
                    continue;
                }
                Some(Class::Dispatch(category)) => category,
                None => {
                    return Err(LexError::UnexpectedByte {
                        byte,
                        position: cursor.location(),
                    });
                }
            };

            let start = cursor.position();
            trace!(
                byte,
                offset = cursor.offset(),
                %category,
                rules = self.registry.len(category),
                "dispatch"
            );

            if category.skips_marker() {
                cursor.advance();
            }
            self.registry.lex(category, cursor, &mut tokens);

            if cursor.position() == start && !cursor.is_eof() {
                return Err(LexError::Stalled {
                    category,
                    position: cursor.location(),
                });
            }
        }

        Ok(tokens)
    }

    fn classify(&self, byte: u8) -> Option<Class> {
        let s = &self.settings;
        if s.ignore.has_point(byte) {
            Some(Class::Ignore)
        } else if s.numbers.is_in_range(byte) {
            Some(Class::Dispatch(Category::Number))
        } else if s.string.has_point(byte) {
            Some(Class::Dispatch(Category::String))
        } else if s.chars.is_in_range(byte) || s.plain_chars.has_point(byte) {
            Some(Class::Dispatch(Category::Identifier))
        } else if s.comment.has_point(byte) {
            Some(Class::Dispatch(Category::Comment))
        } else if s.delimiter.has_point(byte) {
            Some(Class::Dispatch(Category::Delimiter))
        } else {
            None
        }
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts = f.debug_map();
        for category in Category::ALL {
            counts.entry(&category, &self.registry.len(category));
        }
        counts.finish()?;
        write!(f, " {:?}", self.settings)
    }
}
