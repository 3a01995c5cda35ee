use crate::interpreter::value::core::Value;

/// The contents of an array value.
///
/// Besides its elements, an array tracks a logical capacity. The length never
/// exceeds the capacity. Appending to a full array doubles the capacity, or
/// sets it to 1 when it was 0. The backing `Vec` is reserved to match, so the
/// logical capacity is also a lower bound on the allocation.
#[derive(Debug, Clone, Default)]
pub struct ArrayValue {
    elements: Vec<Value>,
    capacity: usize,
}

impl ArrayValue {
    /// Creates an array whose capacity equals its length.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::value::{array::ArrayValue, core::Value};
    ///
    /// let array = ArrayValue::from_vec(vec![Value::Integer(1), Value::Integer(2)]);
    ///
    /// assert_eq!(array.len(), 2);
    /// assert_eq!(array.capacity(), 2);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<Value>) -> Self {
        let capacity = elements.len();
        Self { elements, capacity }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical capacity; always at least [`ArrayValue::len`].
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The element at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// The first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.elements.first()
    }

    /// The last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.elements.last()
    }

    /// All elements in order.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Mutable access to the elements, for in-place reordering.
    pub fn elements_mut(&mut self) -> &mut [Value] {
        &mut self.elements
    }

    /// Appends `value`, growing the capacity when the array is full.
    pub fn push(&mut self, value: Value) {
        if self.elements.len() == self.capacity {
            self.capacity = if self.capacity == 0 { 1 } else { self.capacity * 2 };
            self.elements.reserve_exact(self.capacity - self.elements.len());
        }
        self.elements.push(value);
    }

    /// Replaces the element at `index`.
    ///
    /// # Returns
    /// The previous element, or `None` (leaving the array untouched) when
    /// `index` is out of range.
    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        self.elements
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacities_after_pushes(count: usize) -> Vec<usize> {
        let mut array = ArrayValue::default();
        (0..count).map(|n| {
                      array.push(Value::Integer(i64::try_from(n).unwrap()));
                      array.capacity()
                  })
                  .collect()
    }

    #[test]
    fn capacity_doubles_from_one() {
        assert_eq!(capacities_after_pushes(5), vec![1, 2, 4, 4, 8]);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut array = ArrayValue::from_vec(vec![Value::Null; 3]);
        for _ in 0..10 {
            array.push(Value::Null);
            assert!(array.len() <= array.capacity());
        }
        assert_eq!(array.capacity(), 24);
    }

    #[test]
    fn set_out_of_range_leaves_array_alone() {
        let mut array = ArrayValue::from_vec(vec![Value::Integer(1)]);

        assert!(array.set(1, Value::Integer(9)).is_none());
        assert_eq!(array.len(), 1);
        assert!(matches!(array.set(0, Value::Integer(9)), Some(Value::Integer(1))));
        assert!(matches!(array.get(0), Some(Value::Integer(9))));
    }
}
