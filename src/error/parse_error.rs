use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
///
/// Parse errors never stop the parser. They are collected into a list and
/// returned next to the (possibly partial) program, so one pass reports every
/// problem in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("line {line}: expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with this token.
    #[error("line {line}: no prefix parse function for {kind} found")]
    NoPrefixRule {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    #[error("line {line}: could not parse {literal:?} as integer")]
    MalformedInteger {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. }
            | Self::NoPrefixRule { line, .. }
            | Self::MalformedInteger { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_tokens() {
        let error = ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                found:    TokenKind::Eof,
                                                line:     3, };

        assert_eq!(error.to_string(), "line 3: expected next token to be ), got EOF instead");
        assert_eq!(error.line(), 3);
    }

    #[test]
    fn malformed_integer_quotes_the_literal() {
        let error = ParseError::MalformedInteger { literal: "99999999999999999999".into(),
                                                   line:    1, };

        assert_eq!(error.to_string(),
                   "line 1: could not parse \"99999999999999999999\" as integer");
    }
}
