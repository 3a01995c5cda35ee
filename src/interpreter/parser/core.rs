use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A Pratt parser over a lazily scanned token stream.
///
/// The parser always looks at two tokens: `current`, the token being
/// consumed, and `peek`, the one right after it. Every rule starts with
/// `current` on the first token of its construct and leaves `current` on the
/// last token it consumed.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    peek:    Token,
    errors:  Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the first token of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next().unwrap_or_else(|| Token::eof(1));
        let peek = lexer.next().unwrap_or_else(|| Token::eof(current.line));

        Self { lexer,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails is recorded as a diagnostic and skipped; parsing
    /// resumes with the token after the one the failure stopped on.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    trace!(%error, "dropping statement");
                    self.errors.push(error);
                },
            }
            self.advance();
        }

        debug!(statements = statements.len(), errors = self.errors.len(), "parsed program");
        Program { statements }
    }

    /// Diagnostics collected so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Moves one token forward.
    ///
    /// Once the stream is exhausted, `peek` stays on `EOF`.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        let next = self.lexer.next().unwrap_or_else(|| Token::eof(self.lexer.line()));
        self.current = mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        &self.current
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        &self.peek
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token is of `kind`.
    ///
    /// # Errors
    /// `ParseError::ExpectedToken` naming both kinds when the next token does
    /// not match. The parser does not move in that case.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind)
                                                      -> ParseResult<()> {
        if self.peek_is(kind) {
            self.advance();
            return Ok(());
        }

        Err(ParseError::ExpectedToken { expected: kind,
                                        found:    self.peek.kind,
                                        line:     self.peek.line, })
    }

    /// Skips an optional `;` after a statement.
    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }
}
