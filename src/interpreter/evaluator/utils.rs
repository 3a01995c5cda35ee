use std::{cell::RefCell, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::value::{array::ArrayValue, core::Value},
    util::num::i64_to_index,
};

/// Builds the error for an argument of the wrong kind.
///
/// # Parameters
/// - `name`: Name of the builtin.
/// - `found`: The rejected argument.
/// - `line`: Line number for error reporting.
pub fn unsupported_argument(name: &'static str, found: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidArgument { name,
                                    details: format!("got {}", found.type_name()),
                                    line }
}

/// Ensures that `value` is an array and returns its shared contents.
///
/// # Errors
/// `InvalidArgument` naming `name` if `value` is anything else.
pub fn expect_array<'a>(name: &'static str,
                        value: &'a Value,
                        line: usize)
                        -> Result<&'a Rc<RefCell<ArrayValue>>, RuntimeError> {
    match value {
        Value::Array(array) => Ok(array),
        other => Err(unsupported_argument(name, other, line)),
    }
}

/// Ensures that `value` is an integer and returns it.
///
/// # Errors
/// `InvalidArgument` naming `name` if `value` is anything else.
pub fn expect_integer(name: &'static str, value: &Value, line: usize) -> Result<i64, RuntimeError> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(unsupported_argument(name, other, line)),
    }
}

/// Converts `index` into a position below `len`.
///
/// # Errors
/// `IndexOutOfBounds` if `index` is negative or not below `len`.
pub fn checked_position(index: i64, len: usize, line: usize) -> Result<usize, RuntimeError> {
    i64_to_index(index).filter(|&position| position < len)
                       .ok_or(RuntimeError::IndexOutOfBounds { index, len, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_must_be_in_range() {
        assert_eq!(checked_position(0, 1, 1), Ok(0));
        assert!(matches!(checked_position(1, 1, 2),
                         Err(RuntimeError::IndexOutOfBounds { index: 1, len: 1, line: 2 })));
        assert!(checked_position(-1, 5, 1).is_err());
    }

    #[test]
    fn wrong_kind_names_the_builtin() {
        let err = expect_integer("get", &Value::Null, 3).unwrap_err();
        assert_eq!(err.to_string(), "argument to `get` not supported: got NULL");
    }
}
