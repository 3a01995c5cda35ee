use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Keywords may have several spellings: `factos` is read as `true`,
/// `unfactos` as `false` and `ret` as `return`. The literal text of a token is
/// kept separately in [`Token`], so aliases stay distinguishable when a
/// diagnostic needs to quote the source.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Identifiers such as `x` or `make_counter`.
    #[regex(r"[a-zA-Z_]+")]
    Identifier,
    /// Integer literal text such as `42`. Parsed into a number by the parser.
    #[regex(r"[0-9]+")]
    Integer,
    /// String literals. Run to the next `"` or to the end of input; no
    /// escape sequences are recognised.
    #[regex(r#""[^"]*"?"#, count_string_lines, allow_greedy = true)]
    String,
    /// `fun`
    #[token("fun")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true` or `factos`
    #[token("true")]
    #[token("factos")]
    True,
    /// `false` or `unfactos`
    #[token("false")]
    #[token("unfactos")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return` or `ret`
    #[token("return")]
    #[token("ret")]
    Return,
    /// `for`. Reserved; no construct uses it yet.
    #[token("for")]
    For,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Line feeds. Skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// Any character the language does not recognise.
    Illegal,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::String => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::For => "FOR",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Bumps the line counter for every line feed inside a string literal.
fn count_string_lines(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex.extras.line += lex.slice().matches('\n').count();
    true
}

/// A token together with the source text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The literal text. For strings this is the content between the quotes.
    pub literal: String,
    /// The source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Creates the end-of-input marker.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

/// Lazy token stream over a source string.
///
/// The stream never fails: characters that do not start any token come out as
/// [`TokenKind::Illegal`]. Exactly one [`TokenKind::Eof`] token is produced at
/// the end, after which the iterator is exhausted. [`Lexer::restart`] rewinds
/// to the beginning of the source.
///
/// # Example
/// ```
/// use stargust::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("let x = factos;").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Let,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::True,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer_with_extras(source, LexerExtras::default()),
               finished: false }
    }

    /// Rewinds the stream to the first token.
    pub fn restart(&mut self) {
        self.inner = TokenKind::lexer_with_extras(self.source, LexerExtras::default());
        self.finished = false;
    }

    /// The line the lexer is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some(scanned) = self.inner.next() else {
            self.finished = true;
            return Some(Token::eof(self.line()));
        };

        let slice = self.inner.slice();
        let token = match scanned {
            Ok(TokenKind::String) => {
                let body = &slice[1..];
                let body = body.strip_suffix('"').unwrap_or(body);
                // Multi-line strings report the line they start on.
                let start = self.line() - slice.matches('\n').count();
                Token::new(TokenKind::String, body, start)
            },
            Ok(kind) => Token::new(kind, slice, self.line()),
            Err(()) => Token::new(TokenKind::Illegal, slice, self.line()),
        };

        Some(token)
    }
}
