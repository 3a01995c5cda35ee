use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until
    /// the closing `}` token is reached.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Returns
    /// The block, with `current` on the closing brace.
    ///
    /// # Errors
    /// `ParseError::ExpectedToken` if the input ends before the `}`, and any
    /// error from the statements inside.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.current().line;
        let mut statements = Vec::new();

        self.advance();
        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                return Err(ParseError::ExpectedToken { expected: TokenKind::RBrace,
                                                       found: TokenKind::Eof,
                                                       line: self.current().line });
            }
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(Block { statements, line })
    }
}
