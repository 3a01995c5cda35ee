use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// This utility is shared by array literals and call arguments. It starts
    /// with `current` on the opening delimiter. An immediately encountered
    /// closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (`]` or `)`).
    ///
    /// # Returns
    /// The parsed expressions, with `current` on the closing token.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or the list is not
    /// followed by `,` or the closing token.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the parameter list of a function literal.
    ///
    /// Starts with `current` on `(` and ends on `)`. Every parameter must be
    /// an identifier.
    ///
    /// # Returns
    /// The parameter names in declaration order.
    ///
    /// # Errors
    /// `ParseError::ExpectedToken` when a parameter is not an identifier or the
    /// list is not closed.
    pub(in crate::interpreter::parser) fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(params);
        }

        self.expect_peek(TokenKind::Identifier)?;
        params.push(self.current().literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Identifier)?;
            params.push(self.current().literal.clone());
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(params)
    }
}
