use crate::{ast::Program, error::ParseError};

/// Parser state and token movement.
///
/// Holds the current and lookahead tokens, drives the statement loop and
/// collects diagnostics.
pub mod core;
/// Expression parsing.
///
/// The Pratt loop together with its prefix and infix rules.
pub mod expression;
/// Operator binding strength.
pub mod precedence;
/// Statement parsing: declarations, assignments, returns and expression
/// statements.
pub mod statement;
/// Brace-delimited blocks.
pub mod block;
/// Shared helpers for comma-separated lists and parameter lists.
pub mod utils;

pub use self::core::Parser;

/// Parses `source` into a program, collecting every diagnostic on the way.
///
/// Parsing never stops at the first problem. A statement that fails to parse
/// is dropped and the parser resumes at the next token, so the returned
/// program holds every statement that could be recovered. Callers must not
/// evaluate a program whose diagnostic list is non-empty.
///
/// # Example
/// ```
/// use stargust::interpreter::parser::parse;
///
/// let (program, diagnostics) = parse("let x = 5; x = x * 2;");
/// assert!(diagnostics.is_empty());
/// assert_eq!(program.statements.len(), 2);
///
/// let (_, diagnostics) = parse("let x 5;");
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].to_string(),
///            "line 1: expected next token to be =, got INT instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
