use crate::interpreter::lexer::TokenKind;

/// How strongly an infix token binds, from weakest to strongest.
///
/// The derived ordering follows declaration order, so `Sum < Product` and so
/// on. Tokens that are not infix operators bind at [`Precedence::Lowest`],
/// which ends the Pratt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Operands of `!` and unary `-`.
    Prefix,
    /// Calls `f(x)` and indexing `a[i]`.
    Call,
}

impl Precedence {
    /// The binding strength of `kind` in infix position.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::{lexer::TokenKind, parser::precedence::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Star) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::LBracket), Precedence::Call);
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Self::Equals,
            TokenKind::Less | TokenKind::Greater => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Star | TokenKind::Slash => Self::Product,
            TokenKind::LParen | TokenKind::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}
