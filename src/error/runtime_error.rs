use thiserror::Error;

use crate::ast::{InfixOperator, PrefixOperator};

/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the evaluation of the enclosing program and travels
/// unchanged to the host, where it becomes a visible
/// [`Value::Error`](crate::interpreter::value::core::Value::Error). The
/// message never contains the line; use [`RuntimeError::line`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name was not found in any scope nor among the builtins.
    #[error("identifier not found: {name}")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `let` for a name that already exists in the innermost frame.
    #[error("variable {name} is already declared in this scope")]
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to a name that no frame declares.
    #[error("variable {name} is not defined in any enclosing scope")]
    NotDefined {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands of an infix operator have different kinds.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Kind of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prefix operator was applied to a kind it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Kind of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An infix operator was applied to a kind it does not support.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Kind of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64-bit signed range.
    #[error("integer overflow in {left} {op} {right}")]
    Overflow {
        /// Left operand.
        left:  i64,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Unary minus on `i64::MIN`.
    #[error("integer overflow in -({value})")]
    NegationOverflow {
        /// The operand.
        value: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The callee of a call expression is neither a function nor a builtin.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Kind of the callee.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A user function received the wrong number of arguments.
    #[error("wrong number of arguments: expected {expected}, got {found}")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin received the wrong number of arguments.
    #[error("wrong number of arguments to `{name}`: expected {expected}, got {found}")]
    BuiltinArgumentCount {
        /// Name of the builtin.
        name:     &'static str,
        /// Number of arguments the builtin takes.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin received an argument of a kind it does not accept.
    #[error("argument to `{name}` not supported: {details}")]
    InvalidArgument {
        /// Name of the builtin.
        name:    &'static str,
        /// What was wrong with the argument.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A builtin was asked for a position outside the collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: i64,
        /// Length of the collection.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Indexing a value that cannot be indexed, or with an unsuitable index.
    #[error("index operator not supported: {collection}[{index}]")]
    IndexNotSupported {
        /// Kind of the indexed value.
        collection: &'static str,
        /// Kind of the index.
        index:      &'static str,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// A map literal key that is not an integer, boolean or string.
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Kind of the rejected key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error was raised on.
    ///
    /// # Example
    /// ```
    /// use stargust::error::RuntimeError;
    ///
    /// let error = RuntimeError::DivisionByZero { line: 7 };
    ///
    /// assert_eq!(error.line(), 7);
    /// assert_eq!(error.to_string(), "division by zero");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownIdentifier { line, .. }
            | Self::AlreadyDeclared { line, .. }
            | Self::NotDefined { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line, .. }
            | Self::NegationOverflow { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::BuiltinArgumentCount { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::IndexNotSupported { line, .. }
            | Self::UnusableHashKey { line, .. }
            | Self::CallDepthExceeded { line, .. } => *line,
        }
    }
}
