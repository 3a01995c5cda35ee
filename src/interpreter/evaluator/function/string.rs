use crate::{
    interpreter::{
        evaluator::{
            function::core::BuiltinResult,
            utils::{checked_position, expect_integer, unsupported_argument},
        },
        output::OutputSink,
        value::core::Value,
    },
    util::num::usize_to_i64_saturating,
};

/// Returns the length of a string (in characters) or of an array.
///
/// # Example
/// ```
/// use stargust::interpreter::{
///     evaluator::function::string::len, output::silent_sink, value::core::Value,
/// };
///
/// assert_eq!(len(&["héllo".into()], &silent_sink(), 1).unwrap().to_string(), "5");
/// assert!(len(&[Value::Integer(1)], &silent_sink(), 1).is_err());
/// ```
pub fn len(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let count = match &args[0] {
        Value::String(s) => s.chars().count(),
        Value::Array(array) => array.borrow().len(),
        other => return Err(unsupported_argument("len", other, line)),
    };

    Ok(Value::Integer(usize_to_i64_saturating(count)))
}

/// Returns the character at a position of a string, as a new string.
///
/// # Errors
/// `IndexOutOfBounds` unless `0 <= index < len`.
pub fn get(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let Value::String(s) = &args[0] else {
        return Err(unsupported_argument("get", &args[0], line));
    };
    let index = expect_integer("get", &args[1], line)?;

    let position = checked_position(index, s.chars().count(), line)?;
    let character = s.chars().nth(position).map(String::from).unwrap_or_default();

    Ok(Value::from(character))
}
