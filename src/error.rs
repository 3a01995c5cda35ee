/// Parsing errors.
///
/// Defines the diagnostics the parser collects while building a program:
/// unexpected tokens, tokens that cannot start an expression and integer
/// literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, type mismatches, invalid operations,
/// wrong argument counts and unsupported indexing.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
