/// Binary operator evaluation logic.
///
/// Integer arithmetic and comparison, string concatenation, identity
/// equality and the type-mismatch rules.
pub mod binary;

/// Prefix operator evaluation logic.
///
/// Implements `!` (truthiness negation) and unary `-`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, the unwinding channel for `return` and errors,
/// and dispatch over statements and expressions.
pub mod core;

/// Index expressions on arrays and maps.
pub mod index;

/// Utility functions for evaluation.
///
/// Argument checks and position conversions shared by the builtins.
pub mod utils;

/// Function evaluation.
///
/// Handles closure application, the builtin table and the builtin
/// implementations.
pub mod function;
