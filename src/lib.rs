//! # stargust
//!
//! StarGust is a small dynamically typed scripting language with a
//! tree-walking interpreter written in Rust. Source text is scanned by a
//! lexer, parsed by a Pratt parser into an AST and evaluated directly over a
//! chain of lexical scopes, with first-class closures, arrays and maps.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::sync::Once;

use crate::interpreter::{
    output::stdout_sink,
    session::{Outcome, Session},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes back to a canonical, fully parenthesised form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scopes and output to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::interpreter::{
    evaluator::core::Evaluator, parser::parse, scope::Scope, value::core::Value,
};

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber writing to stderr.
///
/// `filter` takes an `EnvFilter` directive such as `"stargust=debug"`. Without
/// one, `RUST_LOG` is used, and without that only warnings are shown. Calling
/// this more than once has no further effect.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = filter.map(EnvFilter::new)
                           .or_else(|| EnvFilter::try_from_default_env().ok())
                           .unwrap_or_else(|| EnvFilter::new("warn"));

        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(filter)
                                      .init();
    });
}

/// Parses and evaluates `source` in a fresh session writing to stdout.
///
/// # Examples
/// ```
/// use stargust::{evaluate, interpreter::session::Outcome};
///
/// // Simple expression: the result is the value of the last statement.
/// match evaluate("let result = 2 + 2; result") {
///     Outcome::Completed(Some(value)) => assert_eq!(value.to_string(), "4"),
///     other => panic!("{other:?}"),
/// }
///
/// // Runtime errors come back as error values.
/// match evaluate("let y = x + 1; y") {
///     Outcome::Completed(Some(value)) => assert!(value.is_error()),
///     other => panic!("{other:?}"),
/// }
/// ```
#[must_use]
pub fn evaluate(source: &str) -> Outcome {
    Session::new(stdout_sink()).run(source)
}
