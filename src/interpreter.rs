/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, calls closures and builtins, and produces results. It
/// is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles declarations, assignments, closures and `return`.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal and
///   source line.
/// - Resolves keyword aliases such as `factos` and `ret`.
/// - Turns unrecognised characters into `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// Destinations for program output.
///
/// `puts` writes through an injected sink so hosts decide whether output goes
/// to stdout, into a buffer or nowhere.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, collecting errors with location info.
/// - Resolves operator precedence with a Pratt loop.
pub mod parser;
/// Lexical environments.
///
/// Chained frames of bindings that closures capture by reference.
pub mod scope;
/// Host sessions.
///
/// Ties parsing and evaluation together over one persistent global scope.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value kinds used during interpretation:
/// null, booleans, integers, strings, arrays, maps, closures, builtins and
/// errors. It also provides truthiness, identity and map-key rules.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Derives structural map keys from integers, booleans and strings.
/// - Renders values in their canonical printed form.
pub mod value;
