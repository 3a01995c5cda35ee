/// Array contents.
///
/// Defines `ArrayValue`, the element storage behind `Value::Array`, including
/// the capacity bookkeeping used when appending.
pub mod array;
/// Closure values.
///
/// Defines `FunctionValue`, a function literal bundled with the scope it
/// captured.
pub mod function;
/// Map contents and keys.
///
/// Defines `HashKey`, the structural key derived from integers, booleans and
/// strings, and `HashValue`, the map behind `Value::Hash`.
pub mod hash;

pub mod core;
