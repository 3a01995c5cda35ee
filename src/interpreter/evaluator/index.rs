use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
    util::num::i64_to_index,
};

impl Evaluator {
    /// Evaluates `collection[index]`.
    ///
    /// - Arrays take an integer index. A position outside the array,
    ///   including any negative one, yields `null`.
    /// - Maps take an integer, boolean or string key. A missing key yields
    ///   `null`.
    ///
    /// # Errors
    /// `IndexNotSupported` for any other pairing, including a map indexed by
    /// a value that cannot be a key.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
    ///
    /// let v = Evaluator::eval_index(&array, &Value::Integer(1), 1).unwrap();
    /// assert_eq!(v.to_string(), "20");
    ///
    /// let v = Evaluator::eval_index(&array, &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(v.to_string(), "null");
    /// ```
    pub fn eval_index(collection: &Value,
                      index: &Value,
                      line: usize)
                      -> Result<Value, RuntimeError> {
        let unsupported = || RuntimeError::IndexNotSupported { collection: collection.type_name(),
                                                               index: index.type_name(),
                                                               line };

        match (collection, index) {
            (Value::Array(array), Value::Integer(position)) => {
                let element = i64_to_index(*position).and_then(|i| array.borrow().get(i).cloned());
                Ok(element.unwrap_or(Value::Null))
            },
            (Value::Hash(map), key) => {
                let key = key.hash_key().ok_or_else(unsupported)?;
                Ok(map.get(&key).cloned().unwrap_or(Value::Null))
            },
            _ => Err(unsupported()),
        }
    }
}
