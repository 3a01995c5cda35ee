use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: truthiness negation, defined for every value.
    /// - `Negate`: integer negation.
    ///
    /// # Parameters
    /// - `op`: Prefix operator.
    /// - `operand`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Errors
    /// `UnknownPrefixOperator` when negating a non-integer, and
    /// `NegationOverflow` for `-(i64::MIN)`.
    ///
    /// # Example
    /// ```
    /// use stargust::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v.to_string(), "-5");
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Not, &Value::Null, 1).unwrap();
    /// assert_eq!(v.to_string(), "true");
    ///
    /// let e = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Boolean(true), 1);
    /// assert_eq!(e.unwrap_err().to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_prefix(op: PrefixOperator,
                       operand: &Value,
                       line: usize)
                       -> Result<Value, RuntimeError> {
        match op {
            PrefixOperator::Not => Ok(Value::Boolean(!operand.is_truthy())),
            PrefixOperator::Negate => match operand {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::NegationOverflow { value: *n,
                                                                              line }),
                other => Err(RuntimeError::UnknownPrefixOperator { op,
                                                                   operand: other.type_name(),
                                                                   line }),
            },
        }
    }
}
