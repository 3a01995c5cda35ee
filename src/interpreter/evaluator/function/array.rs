use rand::seq::SliceRandom;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::core::BuiltinResult,
            utils::{checked_position, expect_array, expect_integer},
        },
        output::OutputSink,
        value::core::Value,
    },
};

/// Returns the first element of an array, or `null` if it is empty.
///
/// # Example
/// ```
/// use stargust::interpreter::{
///     evaluator::function::array::first, output::silent_sink, value::core::Value,
/// };
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// assert_eq!(first(&[array], &silent_sink(), 1).unwrap().to_string(), "1");
/// assert_eq!(first(&[Value::from(vec![])], &silent_sink(), 1).unwrap().to_string(), "null");
/// ```
pub fn first(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("first", &args[0], line)?;
    Ok(array.borrow().first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("last", &args[0], line)?;
    Ok(array.borrow().last().cloned().unwrap_or(Value::Null))
}

/// Appends the second argument to the array and returns the array.
///
/// The array is changed in place, so every binding of it sees the new
/// element.
pub fn push(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("push", &args[0], line)?;
    array.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}

/// Replaces the element at a position and returns the array.
///
/// # Errors
/// `IndexOutOfBounds` unless `0 <= index < len`.
pub fn set(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("set", &args[0], line)?;
    let index = expect_integer("set", &args[1], line)?;

    let mut contents = array.borrow_mut();
    let position = checked_position(index, contents.len(), line)?;
    contents.set(position, args[2].clone());

    Ok(args[0].clone())
}

/// Sorts an array of integers ascending, in place, and returns it.
///
/// # Errors
/// `InvalidArgument` if any element is not an integer. The array is left
/// untouched in that case.
pub fn sort(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("sort", &args[0], line)?;
    let mut contents = array.borrow_mut();

    let mut numbers = contents.elements()
                              .iter()
                              .map(|element| match element {
                                  Value::Integer(n) => Ok(*n),
                                  other => Err(RuntimeError::InvalidArgument {
                                      name: "sort",
                                      details: format!("all elements must be INTEGER, found {}",
                                                       other.type_name()),
                                      line,
                                  }),
                              })
                              .collect::<Result<Vec<_>, _>>()?;
    numbers.sort_unstable();

    for (slot, n) in contents.elements_mut().iter_mut().zip(numbers) {
        *slot = Value::Integer(n);
    }
    drop(contents);

    Ok(args[0].clone())
}

/// Reverses an array in place and returns it.
pub fn reverse(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("reverse", &args[0], line)?;
    array.borrow_mut().elements_mut().reverse();
    Ok(args[0].clone())
}

/// Shuffles an array in place and returns it.
pub fn shuffle(args: &[Value], _output: &OutputSink, line: usize) -> BuiltinResult {
    let array = expect_array("shuffle", &args[0], line)?;
    array.borrow_mut().elements_mut().shuffle(&mut rand::thread_rng());
    Ok(args[0].clone())
}
