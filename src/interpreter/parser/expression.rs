use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionLiteral, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

/// Maps a token to the binary operator it spells, if any.
const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Star => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Less => Some(InfixOperator::Less),
        TokenKind::Greater => Some(InfixOperator::Greater),
        TokenKind::EqualEqual => Some(InfixOperator::Equal),
        TokenKind::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// This is the Pratt loop. The token under `current` selects a prefix
    /// rule, which produces the left operand. Then, as long as the next token
    /// is an infix operator binding tighter than `precedence`, the parser
    /// moves onto it and lets the infix rule extend the left operand. Equal
    /// precedence stops the loop, which makes every binary operator left
    /// associative. A `;` always ends the expression.
    ///
    /// # Parameters
    /// - `precedence`: Binding strength of the operator to the left.
    ///
    /// # Returns
    /// The parsed expression, with `current` on its last token.
    ///
    /// # Errors
    /// `ParseError::NoPrefixRule` if `current` cannot start an expression,
    /// plus anything the individual rules report.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek().kind)
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Dispatches on the token that starts an expression.
    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = self.current();
        let line = token.line;

        match token.kind {
            TokenKind::Identifier => Ok(Expr::Identifier { name: token.literal.clone(),
                                                           line }),
            TokenKind::Integer => self.parse_integer(),
            TokenKind::String => Ok(Expr::String { value: token.literal.clone(),
                                                   line }),
            TokenKind::True => Ok(Expr::Boolean { value: true,
                                                  line }),
            TokenKind::False => Ok(Expr::Boolean { value: false,
                                                   line }),
            TokenKind::Bang => self.parse_prefix_operation(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_operation(PrefixOperator::Negate),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expr::Array { elements, line })
            },
            TokenKind::LBrace => self.parse_hash(),
            kind @ (TokenKind::Let
            | TokenKind::Else
            | TokenKind::Return
            | TokenKind::For
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::RBracket
            | TokenKind::NewLine
            | TokenKind::Ignored
            | TokenKind::Illegal
            | TokenKind::Eof) => Err(ParseError::NoPrefixRule { kind, line }),
        }
    }

    /// Extends `left` with the infix construct under `current`.
    fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        let token = self.current();
        let line = token.line;

        if let Some(op) = infix_operator(token.kind) {
            let precedence = Precedence::of(token.kind);
            self.advance();
            let right = self.parse_expression(precedence)?;

            return Ok(Expr::Infix { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line });
        }

        match token.kind {
            TokenKind::LParen => {
                let arguments = self.parse_expression_list(TokenKind::RParen)?;
                Ok(Expr::Call { callee: Box::new(left),
                                arguments,
                                line })
            },
            TokenKind::LBracket => {
                self.advance();
                let index = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(TokenKind::RBracket)?;

                Ok(Expr::Index { collection: Box::new(left),
                                 index: Box::new(index),
                                 line })
            },
            // Precedence::of only lifts infix tokens above Lowest.
            _ => Ok(left),
        }
    }

    /// Parses an integer literal.
    ///
    /// # Errors
    /// `ParseError::MalformedInteger` if the digits do not fit into an `i64`.
    fn parse_integer(&self) -> ParseResult<Expr> {
        let token = self.current();

        token.literal
             .parse::<i64>()
             .map(|value| Expr::Integer { value,
                                          line: token.line })
             .map_err(|_| ParseError::MalformedInteger { literal: token.literal.clone(),
                                                         line:    token.line, })
    }

    /// Parses `!<expr>` or `-<expr>`. The operand binds at prefix strength, so
    /// `-a * b` is `(-a) * b`.
    fn parse_prefix_operation(&mut self, op: PrefixOperator) -> ParseResult<Expr> {
        let line = self.current().line;

        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          operand: Box::new(operand),
                          line })
    }

    /// Parses `( <expr> )`. Grouping leaves no trace in the tree.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    /// The parentheses around the condition are required.
    ///
    /// # Returns
    /// An `Expr::If` node, with `current` on the last closing brace.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        let line = self.current().line;

        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses `fun(<params>) { <statements> }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        let line = self.current().line;

        self.expect_peek(TokenKind::LParen)?;
        let params = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Function(Rc::new(FunctionLiteral { params, body, line })))
    }

    /// Parses a map literal of the form `{ k1: v1, k2: v2 }`.
    ///
    /// An empty map `{}` is accepted. Keys are arbitrary expressions here;
    /// whether they are usable as keys is decided during evaluation.
    ///
    /// Grammar: `map := "{" (expr ":" expr ("," expr ":" expr)*)? "}"`.
    fn parse_hash(&mut self) -> ParseResult<Expr> {
        let line = self.current().line;
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expr::Hash { pairs, line })
    }
}
