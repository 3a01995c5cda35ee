use crate::interpreter::{
    evaluator::function::core::BuiltinResult, output::OutputSink, value::core::Value,
};

/// Writes the rendering of every argument, separated by spaces, as one line.
///
/// Accepts any number of arguments; with none it writes an empty line.
/// Strings are written without quotes.
///
/// # Returns
/// Always `null`.
///
/// # Example
/// ```
/// use stargust::interpreter::{
///     evaluator::function::print::puts, output::buffer_sink, value::core::Value,
/// };
///
/// let sink = buffer_sink();
/// let result = puts(&["a".into(), Value::Integer(1)], &sink, 1).unwrap();
///
/// assert_eq!(sink.contents(), "a 1\n");
/// assert_eq!(result.to_string(), "null");
/// ```
pub fn puts(args: &[Value], output: &OutputSink, _line: usize) -> BuiltinResult {
    let line = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    output.println(&line);
    Ok(Value::Null)
}
