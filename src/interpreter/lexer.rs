use logos::Logos;

use crate::error::ParseError;

/// The kind of a lexical token.
///
/// Keywords are Devanagari words; punctuation and operators are ASCII.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `मानौ`, declares a variable.
    #[token("मानौ")]
    Let,
    /// `कार्य`, declares a function.
    #[token("कार्य")]
    Function,
    /// `छाप`, prints a value.
    #[token("छाप")]
    Print,
    /// `फिर्ता` (reserved).
    #[token("फिर्ता")]
    Return,
    /// `यदि` (reserved).
    #[token("यदि")]
    If,
    /// `नभए` (reserved).
    #[token("नभए")]
    Else,
    /// `सत्य` (reserved).
    #[token("सत्य")]
    True,
    /// `असत्य` (reserved).
    #[token("असत्य")]
    False,

    /// Numerals, either Devanagari (`१०`) or ASCII decimal (`10`, `2.5`).
    #[regex(r"[\x{0966}-\x{096F}]+")]
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Double quoted strings. The lexeme keeps its quotes.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    })]
    String,
    /// Variable and function names such as `क` or `जोड`.
    #[regex(r"[a-zA-Z_\x{0900}-\x{0963}\x{0970}-\x{097F}][a-zA-Z0-9_\x{0900}-\x{0963}\x{0966}-\x{097F}\x{200C}\x{200D}]*")]
    Identifier,

    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Period,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenCurly,
    /// `}`
    #[token("}")]
    CloseCurly,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Mod,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equal,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for keywords the language reserves but does not run.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Return | Self::If | Self::Else | Self::True | Self::False)
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token: its kind, the source text it was read from, and its line.
///
/// Tokens are immutable once produced. The line is only used for error
/// messages; tokens built by hand may use `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text backing the token.
    pub lexeme: String,
    /// Line number in the source code.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    ///
    /// ## Example
    /// ```
    /// use lipi::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "क", 3);
    /// assert_eq!(token.lexeme, "क");
    /// assert_eq!(token.line, 3);
    /// ```
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Creates an identifier token with no source position.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, name, 0)
    }
}

/// Splits source text into tokens.
///
/// Comments and blanks are dropped; line breaks are kept as
/// [`TokenKind::NewLine`] because they separate statements.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for a character no token starts
/// with, such as an unterminated string quote.
///
/// # Example
/// ```
/// use lipi::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("मानौ क = ५").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Identifier, TokenKind::Equal, TokenKind::Number]);
/// assert_eq!(tokens[3].lexeme, "५");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(kind) = lexer.next() {
        // A token that bumps the counter belongs to the line it started on.
        let line = lexer.extras.line - lexer.slice().matches('\n').count();
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}
