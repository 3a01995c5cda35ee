/// Array builtins.
///
/// `first`, `last`, `push`, `set`, `sort`, `reverse` and `shuffle`. The
/// mutating ones change the array in place and return it.
pub mod array;
/// The `puts` builtin.
///
/// Writes the rendering of its arguments to the evaluator's output sink.
pub mod print;
/// String builtins.
///
/// `len`, which also measures arrays, and `get`, which extracts one
/// character.
pub mod string;

pub mod core;
