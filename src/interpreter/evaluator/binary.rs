use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// The rules are tried in this order:
    /// - two integers: arithmetic and comparison by value.
    /// - two strings with `+`: concatenation into a new string.
    /// - `==` and `!=`: identity, see [`Value::same_instance`]. Operands of
    ///   different kinds are simply unequal.
    /// - operands of different kinds: `TypeMismatch`.
    /// - anything else: `UnknownInfixOperator`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`, `right`: The operands.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use stargust::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Add, &"ab".into(), &"cd".into(), 1).unwrap();
    /// assert_eq!(sum.to_string(), "abcd");
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Add, &Value::Integer(1), &true.into(), 1);
    /// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(op: InfixOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_infix(op, *a, *b, line),
            (Value::String(a), Value::String(b)) if op == InfixOperator::Add => {
                Ok(Value::String(Rc::from(format!("{a}{b}"))))
            },
            _ => match op {
                InfixOperator::Equal => Ok(Value::Boolean(left.same_instance(right))),
                InfixOperator::NotEqual => Ok(Value::Boolean(!left.same_instance(right))),
                _ if left.type_name() != right.type_name() => {
                    Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                     op,
                                                     right: right.type_name(),
                                                     line })
                },
                _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                              op,
                                                              right: right.type_name(),
                                                              line }),
            },
        }
    }

    /// Integer arithmetic and comparison.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor, `Overflow` when the result does
    /// not fit in an `i64`.
    fn eval_integer_infix(op: InfixOperator,
                          a: i64,
                          b: i64,
                          line: usize)
                          -> Result<Value, RuntimeError> {
        let overflow = || RuntimeError::Overflow { left: a,
                                                   op,
                                                   right: b,
                                                   line };

        let value = match op {
            InfixOperator::Add => Value::Integer(a.checked_add(b).ok_or_else(overflow)?),
            InfixOperator::Sub => Value::Integer(a.checked_sub(b).ok_or_else(overflow)?),
            InfixOperator::Mul => Value::Integer(a.checked_mul(b).ok_or_else(overflow)?),
            InfixOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Value::Integer(a.checked_div(b).ok_or_else(overflow)?)
            },
            InfixOperator::Less => Value::Boolean(a < b),
            InfixOperator::Greater => Value::Boolean(a > b),
            InfixOperator::Equal => Value::Boolean(a == b),
            InfixOperator::NotEqual => Value::Boolean(a != b),
        };

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: InfixOperator, a: i64, b: i64) -> Result<Value, RuntimeError> {
        Evaluator::eval_infix(op, &Value::Integer(a), &Value::Integer(b), 1)
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(eval(InfixOperator::Div, 7, 2).unwrap().to_string(), "3");
        assert_eq!(eval(InfixOperator::Div, -7, 2).unwrap().to_string(), "-3");
    }

    #[test]
    fn arithmetic_errors() {
        assert!(matches!(eval(InfixOperator::Div, 1, 0),
                         Err(RuntimeError::DivisionByZero { line: 1 })));
        assert!(matches!(eval(InfixOperator::Add, i64::MAX, 1), Err(RuntimeError::Overflow { .. })));
        assert!(matches!(eval(InfixOperator::Div, i64::MIN, -1),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn strings_only_support_addition_and_identity() {
        let a = Value::from("a");
        let b = Value::from("b");

        let err = Evaluator::eval_infix(InfixOperator::Sub, &a, &b, 4).unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: STRING - STRING");

        let same = Evaluator::eval_infix(InfixOperator::Equal, &a, &a.clone(), 4).unwrap();
        assert_eq!(same.to_string(), "true");
    }

    #[test]
    fn cross_kind_equality_is_false() {
        let v = Evaluator::eval_infix(InfixOperator::Equal, &Value::Integer(1), &true.into(), 1);
        assert_eq!(v.unwrap().to_string(), "false");
    }
}
