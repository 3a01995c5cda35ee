use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a declaration, `let <name> = <expr>`.
    /// - a return, `return <expr>` or `ret <expr>`.
    /// - an assignment, `<name> = <expr>`, recognised by an identifier
    ///   directly followed by `=`.
    /// - an expression used as a statement.
    ///
    /// Every form accepts an optional trailing `;`.
    ///
    /// # Returns
    /// The parsed [`Statement`], with `current` on its last token.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Identifier if self.peek_is(TokenKind::Assign) => self.parse_assign(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.current().literal.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value, line })
    }

    fn parse_assign(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;
        let name = self.current().literal.clone();

        self.advance();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Assign { name, value, line })
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value, line })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr, line })
    }
}
